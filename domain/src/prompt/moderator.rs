//! Moderator instruction prompt and per-turn context blob.

use crate::conversation::entities::Message;
use crate::persona::PersonaId;
use crate::session::entities::BoardContext;

/// How many history entries the moderator sees per decision
pub const MODERATOR_HISTORY_WINDOW: usize = 3;

/// Fixed system prompt for the moderator model.
///
/// Encodes the four executives, the orchestration rules, and the strict
/// JSON output contract. The rules are enforced by the external model, not
/// verifiable in-process.
pub const MODERATOR_PROMPT: &str = r#"Eres el Moderador de una Junta Directiva. Tu trabajo es gestionar el flujo de la conversación de manera dinámica y realista.
Tienes a 4 ejecutivos:
- CFO (Finanzas, Victoria)
- CTO (Tecnología, Marcus)
- CIO (Información, Sarah)
- CDO (Digital, James)

Reglas de Orquestación:
1. Analiza el último mensaje del usuario o del agente anterior.
2. Decide quién es la persona más relevante para responder o replicar.
3. Si alguien dice algo polémico o que afecta a otra área, haz que el afectado "Levante la Mano" (HAND_RAISE).
4. Si el tema requiere una respuesta directa, asigna el turno de palabra (AGENT_SPEAK).
5. Mantén el debate vivo pero ordenado.

Devuelve tu decisión en formato JSON estricto:
{
  "type": "AGENT_SPEAK" | "HAND_RAISE",
  "agentId": "id_del_agente_que_actua",
  "content": "contenido del mensaje si habla",
  "reasoning": "por qué tomaste esta decisión"
}
"#;

/// Build the user-role context blob for one moderator decision.
///
/// Contains the serialized company context, the current speaker, the raised
/// hands, the last [`MODERATOR_HISTORY_WINDOW`] history entries, and the
/// latest user message.
pub fn moderator_context(
    context: &BoardContext,
    active_speaker: Option<PersonaId>,
    raised_hands: &[PersonaId],
    recent_history: &[Message],
    latest_message: &str,
) -> String {
    let context_json =
        serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
    let hands_json =
        serde_json::to_string(raised_hands).unwrap_or_else(|_| "[]".to_string());
    let history_json =
        serde_json::to_string(recent_history).unwrap_or_else(|_| "[]".to_string());

    let speaker = active_speaker
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| "Nadie".to_string());

    format!(
        "Contexto: {context_json}\n\
         Orador Actual: {speaker}\n\
         Manos Alzadas: {hands_json}\n\
         Historial Reciente: {history_json}\n\
         Último Mensaje: {latest_message}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_blob_contains_all_sections() {
        let context = BoardContext::new("Acme", "Retail", "Chile");
        let history = vec![
            Message::user("¿Cómo van las ventas?"),
            Message::assistant("Subieron un 5%."),
        ];

        let blob = moderator_context(
            &context,
            Some(PersonaId::Cfo),
            &[PersonaId::Cto],
            &history,
            "¿Y los costos?",
        );

        assert!(blob.contains("\"companyName\":\"Acme\""));
        assert!(blob.contains("Orador Actual: cfo"));
        assert!(blob.contains("Manos Alzadas: [\"cto\"]"));
        assert!(blob.contains("Subieron un 5%."));
        assert!(blob.contains("Último Mensaje: ¿Y los costos?"));
    }

    #[test]
    fn test_no_speaker_reads_as_nadie() {
        let blob = moderator_context(&BoardContext::default(), None, &[], &[], "hola");
        assert!(blob.contains("Orador Actual: Nadie"));
        assert!(blob.contains("Manos Alzadas: []"));
    }

    #[test]
    fn test_moderator_prompt_names_the_contract() {
        assert!(MODERATOR_PROMPT.contains("AGENT_SPEAK"));
        assert!(MODERATOR_PROMPT.contains("HAND_RAISE"));
        assert!(MODERATOR_PROMPT.contains("agentId"));
    }
}
