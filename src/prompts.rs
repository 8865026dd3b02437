use crate::models::api::PlanForm;

/// Builds the plan-generation prompt. Every form field is substituted,
/// in the fixed order the labels appear below.
pub fn plan_prompt(form: &PlanForm) -> String {
    format!(
        "You are a fitness and diet planner. Using the following inputs, create two detailed plans:\n\
         1. A **diet plan** table listing day-to-day food intake for {number_of_weeks} weeks.\n\
         2. A **workout plan** table listing day-to-day exercises for {number_of_weeks} weeks.\n\
         \n\
         Inputs:\n\
         - **Workout type**: {workout_type}\n\
         - **Diet type**: {diet_type}\n\
         - **Current body weight**: {current_weight} kg\n\
         - **Target weight**: {target_weight} kg\n\
         - **Specific dietary restrictions**: {dietary_restrictions}\n\
         - **Health conditions**: {health_conditions}\n\
         - **Age**: {age}\n\
         - **Gender**: {gender}\n\
         - **Other instructions**: {comments}\n\
         \n\
         Return the plans in a neat, structured format with tables and include any relevant key notes.",
        number_of_weeks = form.number_of_weeks,
        workout_type = form.workout_type,
        diet_type = form.diet_type,
        current_weight = form.current_weight,
        target_weight = form.target_weight,
        dietary_restrictions = form.dietary_restrictions,
        health_conditions = form.health_conditions,
        age = form.age,
        gender = form.gender,
        comments = form.comments,
    )
}

/// Builds the follow-up prompt grounding the model in the stored plan.
pub fn chat_prompt(plan: &str, question: &str) -> String {
    format!(
        "You are a fitness and diet expert. Answer the following user question based on the given plan:\n\
         \n\
         Plan: {plan}\n\
         \n\
         Question: {question}\n\
         \n\
         Provide a clear and helpful response.",
    )
}
