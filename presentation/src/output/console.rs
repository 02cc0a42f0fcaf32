//! Console output formatter for boardroom turns

use boardroom_domain::{BoardContext, BoardSession, ConversationTurn, Persona, Speaker, TurnKind};
use colored::{Color, Colorize};

/// Formats conversation turns and board state for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one conversation turn
    pub fn turn(turn: &ConversationTurn) -> String {
        if turn.kind == TurnKind::SystemNotice {
            return turn.text.dimmed().italic().to_string();
        }

        match turn.speaker {
            Speaker::User => format!("{} {}", "CEO:".bold(), turn.text),
            Speaker::Persona(id) => {
                let persona = Persona::by_id(id);
                let label = format!(
                    "{} {} ({}):",
                    persona.avatar_glyph, persona.display_name, persona.role
                );
                format!(
                    "{} {}",
                    label.color(Self::persona_color(persona)).bold(),
                    turn.text
                )
            }
        }
    }

    /// The welcome notice shown when the session opens
    pub fn welcome(context: &BoardContext) -> String {
        let company = if context.company_name.trim().is_empty() {
            "su empresa"
        } else {
            &context.company_name
        };
        format!(
            "Bienvenido a la Sala de Juntas, CEO de {}. Presente su tema y convocaré a los ejecutivos relevantes.",
            company
        )
    }

    /// Format the seating chart: every seat, present executives highlighted
    pub fn board(session: &BoardSession) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "La mesa:".bold()));

        for persona in Persona::all() {
            let present = session.is_present(persona.id);
            let speaking = session.active_speaker() == Some(persona.id);

            let seat = format!(
                "  {} {} ({})",
                persona.avatar_glyph, persona.display_name, persona.role
            );
            let line = if speaking {
                format!("{} {}", seat.color(Self::persona_color(persona)).bold(), "● hablando".green())
            } else if present {
                seat.color(Self::persona_color(persona)).to_string()
            } else {
                format!("{} {}", seat.dimmed(), "(ausente)".dimmed())
            };
            output.push_str(&line);
            output.push('\n');
        }

        let raised: Vec<_> = session
            .raised_hands()
            .map(|id| Persona::by_id(id).display_name)
            .collect();
        if !raised.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "✋ con la mano alzada:".yellow(),
                raised.join(", ")
            ));
        }

        output
    }

    /// Parse a persona's `color_tag` hex color into a terminal color.
    ///
    /// Falls back to white if the tag is malformed.
    fn persona_color(persona: &Persona) -> Color {
        let hex = persona.color_tag.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::White;
        }
        match (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            (Ok(r), Ok(g), Ok(b)) => Color::TrueColor { r, g, b },
            _ => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_domain::{PersonaId, Transcript};

    fn without_color<F: FnOnce() -> String>(f: F) -> String {
        colored::control::set_override(false);
        let out = f();
        colored::control::unset_override();
        out
    }

    #[test]
    fn test_user_turn_is_labelled_ceo() {
        let mut transcript = Transcript::new();
        transcript.push_user("¿Cómo vamos?");
        let text = without_color(|| ConsoleFormatter::turn(&transcript.turns()[0]));
        assert_eq!(text, "CEO: ¿Cómo vamos?");
    }

    #[test]
    fn test_persona_turn_carries_identity() {
        let mut transcript = Transcript::new();
        transcript.push_persona(PersonaId::Cfo, "Los números cierran.");
        let text = without_color(|| ConsoleFormatter::turn(&transcript.turns()[0]));
        assert!(text.contains("Victoria Chen (CFO):"));
        assert!(text.contains("Los números cierran."));
    }

    #[test]
    fn test_welcome_defaults_company() {
        let text = ConsoleFormatter::welcome(&BoardContext::default());
        assert!(text.contains("CEO de su empresa"));

        let text = ConsoleFormatter::welcome(&BoardContext::new("Acme", "", ""));
        assert!(text.contains("CEO de Acme"));
    }

    #[test]
    fn test_board_marks_absent_and_present() {
        let mut session = BoardSession::default();
        session.add_executive(PersonaId::Cto);
        let text = without_color(|| ConsoleFormatter::board(&session));
        assert!(text.contains("Marcus Rodriguez"));
        // Three seats remain empty
        assert_eq!(text.matches("(ausente)").count(), 3);
    }
}
