//! Prompt rendering for the dowry assessment.
//!
//! The template is fixed; every empty field falls back to a literal default so the
//! model always sees a complete profile.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, ProfileInput};

const TEMPLATE_NAME: &str = "assessment prompt";

const ASSESSMENT_TEMPLATE: &str = r#"You are a brutally Haryanvi grooms uncle who is calculating dowry for him. 
Respond in this exact format:

📜 [Itemized Demands]
🔥 [Final Burn]

**Grooms Details:**
- Salary: {{ salary }} 
- Caste: {{ caste }}
- complexion: {{ complexion }}
- Height: {{ height }} cm
- Propertyvalue: {{ property_value }}
- education: {{ education }}
- familystatus : {{ family_status }}
{%- if foreign_status %}
- foreignstatus: {{ foreign_status }}
{%- endif %}


**Rules:**
1. Use savage but creative roasts and we are calculating grooms demand
2. Include absurd dowry items (e.g., "2 cows , gots etc")
3. End with a devastating burn for bride 
4. Write in Hinglish/English mix
5. give in 2-3 line ans and dont add or use (*) symbol"#;

/// Fallback text substituted for each empty field.
pub mod defaults {
    pub const SALARY: &str = "Unemployed";
    pub const CASTE: &str = "Irrelevant";
    /// Kept as-is even though it does not describe a complexion.
    pub const COMPLEXION: &str = "Engineer";
    pub const HEIGHT: &str = "150";
    pub const PROPERTY_VALUE: &str = "None";
    pub const EDUCATION: &str = "uneducated";
    pub const FAMILY_STATUS: &str = "garib";
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Render the assessment prompt for a profile.
pub fn render_prompt(profile: &ProfileInput) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    let ctx = context! {
        salary => or_default(&profile.salary, defaults::SALARY),
        caste => or_default(&profile.caste, defaults::CASTE),
        complexion => or_default(&profile.complexion, defaults::COMPLEXION),
        height => or_default(&profile.height, defaults::HEIGHT),
        property_value => or_default(&profile.property_value, defaults::PROPERTY_VALUE),
        education => or_default(&profile.education, defaults::EDUCATION),
        family_status => or_default(&profile.family_status, defaults::FAMILY_STATUS),
        foreign_status => profile.foreign_status.as_str(),
    };

    env.render_str(ASSESSMENT_TEMPLATE, ctx)
        .map(|rendered| rendered.trim().to_string())
        .map_err(|err| AppError::Template {
            template: TEMPLATE_NAME.to_string(),
            reason: err.to_string(),
        })
}
