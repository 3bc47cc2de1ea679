use lesson_core::UserContext;

use crate::ai::GenerationRequest;

/// Interest used when the learner left the field empty.
pub const FALLBACK_INTEREST: &str = "General Overview";

pub const LESSON_PROMPT: &str = "Teach me how hedge funds use artificial intelligence in stock trading.\n\
Please begin the lesson now.";

pub const LESSON_TEMPERATURE: f32 = 0.7;

/// Token budget for the provider's planning pass before it starts writing.
pub const LESSON_THINKING_BUDGET: u32 = 4096;

#[must_use]
pub fn effective_interest(context: &UserContext) -> &str {
    let interest = context.specific_interest();
    if interest.is_empty() {
        FALLBACK_INTEREST
    } else {
        interest
    }
}

/// Persona and constraints for the lesson, tailored to the learner.
#[must_use]
pub fn system_instruction(context: &UserContext) -> String {
    format!(
        "You are an expert financial educator and quantitative analyst working at a top-tier hedge fund.
Your goal is to explain how hedge funds use Artificial Intelligence in stock trading to an intelligent beginner.

Adhere strictly to the following constraints requested by the user:
1. **Length:** Approximately 2,000 words (±10%).
2. **Depth:** Explain machine learning models, NLP, alternative data, reinforcement learning, high-frequency trading (HFT), and portfolio optimization/risk modeling.
3. **Citations:** Include citations for major concepts (e.g., \"According to a 2020 paper by...\").
4. **Visuals:** Use clear ASCII diagrams to visually explain model pipelines and data flows.
5. **Tone:** Intelligent beginner. Accessible but rigorous.
6. **Structure:** Highly structured. Step-by-step breakdowns. Clear definitions before jargon.
7. **Honesty:** If you do not know something, explicitly say \"I don't know.\"

Tailor your explanation based on the user's background:
- Math Comfort: {math}
- Coding Experience: {coding}
- Specific Interest: {interest}

If the user has advanced math skills, use more technical terms. If they are beginners, use analogies.
Start with a clear, engaging introduction.",
        math = context.math_level().label(),
        coding = context.coding_level().label(),
        interest = effective_interest(context),
    )
}

#[must_use]
pub fn lesson_request(context: &UserContext) -> GenerationRequest {
    GenerationRequest {
        system_instruction: system_instruction(context),
        prompt: LESSON_PROMPT.to_string(),
        temperature: LESSON_TEMPERATURE,
        thinking_budget: Some(LESSON_THINKING_BUDGET),
    }
}
