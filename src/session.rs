use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SessionState {
    pub plan: Option<String>,
    pub messages: Vec<ChatTurn>,
}

/// Per-session state, keyed by the id carried in the session cookie.
/// Everything lives in process memory; a restart clears all sessions.
/// The lock is only held around map access, never across an await.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh empty session and returns its id.
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .unwrap()
            .insert(id.clone(), SessionState::default());
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.read().unwrap().contains_key(id)
    }

    pub fn snapshot(&self, id: &str) -> Option<SessionState> {
        self.sessions.read().unwrap().get(id).cloned()
    }

    pub fn plan(&self, id: &str) -> Option<String> {
        self.sessions
            .read()
            .unwrap()
            .get(id)
            .and_then(|state| state.plan.clone())
    }

    /// Stores a freshly generated plan. The conversation history belongs to
    /// the previous plan, so it is dropped here as well.
    pub fn set_plan(&self, id: &str, plan: String) {
        let mut sessions = self.sessions.write().unwrap();
        let state = sessions.entry(id.to_string()).or_default();
        state.plan = Some(plan);
        state.messages.clear();
    }

    /// Drops the conversation history, keeping any stored plan.
    pub fn clear_history(&self, id: &str) {
        if let Some(state) = self.sessions.write().unwrap().get_mut(id) {
            state.messages.clear();
        }
    }

    /// Appends one question/answer pair to the history.
    pub fn append_exchange(&self, id: &str, question: &str, answer: &str) {
        let mut sessions = self.sessions.write().unwrap();
        let state = sessions.entry(id.to_string()).or_default();
        state.messages.push(ChatTurn::user(question));
        state.messages.push(ChatTurn::assistant(answer));
    }

    pub fn remove(&self, id: &str) {
        self.sessions.write().unwrap().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_starts_empty() {
        let store = SessionStore::new();
        let id = store.create();

        let state = store.snapshot(&id).unwrap();
        assert!(state.plan.is_none());
        assert!(state.messages.is_empty());
        assert!(store.contains(&id));
    }

    #[test]
    fn test_set_plan_clears_history() {
        let store = SessionStore::new();
        let id = store.create();

        store.set_plan(&id, "first plan".to_string());
        store.append_exchange(&id, "how much protein?", "about 120g per day");
        assert_eq!(store.snapshot(&id).unwrap().messages.len(), 2);

        store.set_plan(&id, "second plan".to_string());

        let state = store.snapshot(&id).unwrap();
        assert_eq!(state.plan.as_deref(), Some("second plan"));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_clear_history_keeps_plan() {
        let store = SessionStore::new();
        let id = store.create();

        store.set_plan(&id, "plan".to_string());
        store.append_exchange(&id, "q", "a");
        store.clear_history(&id);

        let state = store.snapshot(&id).unwrap();
        assert_eq!(state.plan.as_deref(), Some("plan"));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_append_exchange_preserves_order() {
        let store = SessionStore::new();
        let id = store.create();
        store.set_plan(&id, "plan".to_string());

        store.append_exchange(&id, "first question", "first answer");
        store.append_exchange(&id, "second question", "second answer");

        let messages = store.snapshot(&id).unwrap().messages;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], ChatTurn::user("first question"));
        assert_eq!(messages[1], ChatTurn::assistant("first answer"));
        assert_eq!(messages[2], ChatTurn::user("second question"));
        assert_eq!(messages[3], ChatTurn::assistant("second answer"));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();

        store.set_plan(&a, "plan a".to_string());
        assert_eq!(store.plan(&a).as_deref(), Some("plan a"));
        assert!(store.plan(&b).is_none());
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        let id = store.create();
        store.remove(&id);
        assert!(!store.contains(&id));
        assert!(store.snapshot(&id).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);
    }
}
