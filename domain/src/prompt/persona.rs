//! Persona system prompt rendering.

use crate::persona::Persona;
use crate::session::entities::BoardContext;

/// Render a persona's system prompt for the given company context.
///
/// Substitutes every occurrence of `{companyName}`, `{industry}` and
/// `{country}`; empty fields fall back to a generic phrase so the prompt
/// never reads as a fill-in-the-blank form.
pub fn render_persona_prompt(persona: &Persona, context: &BoardContext) -> String {
    persona
        .prompt_template
        .replace("{companyName}", or_default(&context.company_name, "la empresa"))
        .replace("{industry}", or_default(&context.industry, "tu industria"))
        .replace("{country}", or_default(&context.country, "tu país"))
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaId;

    #[test]
    fn test_substitutes_all_placeholders() {
        let context = BoardContext::new("Acme", "Retail", "Chile");
        let prompt = render_persona_prompt(Persona::by_id(PersonaId::Cfo), &context);

        assert!(prompt.contains("CFO) de Acme"));
        assert!(prompt.contains("Industria: Retail | País: Chile"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_empty_fields_use_generic_phrases() {
        let prompt =
            render_persona_prompt(Persona::by_id(PersonaId::Cto), &BoardContext::default());

        assert!(prompt.contains("CTO) de la empresa"));
        assert!(prompt.contains("Industria: tu industria | País: tu país"));
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let context = BoardContext::new("  ", "Banca", "Perú");
        let prompt = render_persona_prompt(Persona::by_id(PersonaId::Cio), &context);
        assert!(prompt.contains("de la empresa"));
        assert!(prompt.contains("Industria: Banca"));
    }

    #[test]
    fn test_every_persona_template_renders() {
        let context = BoardContext::new("Acme", "Retail", "Chile");
        for persona in Persona::all() {
            let prompt = render_persona_prompt(persona, &context);
            assert!(prompt.contains(persona.display_name));
            assert!(!prompt.contains("{companyName}"));
        }
    }
}
