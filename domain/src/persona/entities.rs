//! Persona registry — the four executives seated at the board.
//!
//! The set is closed and defined at compile time. Personas are immutable:
//! display identity for the presentation layer, a description used in summon
//! notices, and the system-prompt template rendered per company context.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier for an executive persona (Value Object)
///
/// The moderator model refers to personas by these ids in its decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonaId {
    Cfo,
    Cto,
    Cio,
    Cdo,
}

impl PersonaId {
    /// Get the string identifier for this persona
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Cfo => "cfo",
            PersonaId::Cto => "cto",
            PersonaId::Cio => "cio",
            PersonaId::Cdo => "cdo",
        }
    }

    /// All persona ids in seating order
    pub fn all() -> [PersonaId; 4] {
        [PersonaId::Cfo, PersonaId::Cto, PersonaId::Cio, PersonaId::Cdo]
    }

    /// The persona used when a requested id is unknown or a fallback is needed
    pub fn default_id() -> PersonaId {
        PersonaId::Cfo
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cfo" => Ok(PersonaId::Cfo),
            "cto" => Ok(PersonaId::Cto),
            "cio" => Ok(PersonaId::Cio),
            "cdo" => Ok(PersonaId::Cdo),
            other => Err(DomainError::UnknownPersona(other.to_string())),
        }
    }
}

impl Serialize for PersonaId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PersonaId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An executive persona (Entity)
///
/// Immutable for the process lifetime. `color_tag` is a hex color used by
/// the presentation layer for the speaker label.
#[derive(Debug)]
pub struct Persona {
    pub id: PersonaId,
    pub display_name: &'static str,
    pub role: &'static str,
    pub avatar_glyph: &'static str,
    pub color_tag: &'static str,
    pub description: &'static str,
    pub prompt_template: &'static str,
}

static BOARD: [Persona; 4] = [
    Persona {
        id: PersonaId::Cfo,
        display_name: "Victoria Chen",
        role: "CFO",
        avatar_glyph: "💰",
        color_tag: "#4CAF50",
        description: "Directora Financiera - Enfocada en rentabilidad y gestión de riesgos",
        prompt_template: r#"Eres Victoria Chen, la Directora Financiera (CFO) de {companyName}.
Tu enfoque principal es la rentabilidad, gestión de riesgos financieros, y optimización de recursos.
Hablas con autoridad sobre números, presupuestos, inversiones y flujo de caja.
Eres directa, analítica y siempre buscas el ROI.
Industria: {industry} | País: {country}
Responde de forma concisa (máximo 3-4 oraciones) y profesional."#,
    },
    Persona {
        id: PersonaId::Cto,
        display_name: "Marcus Rodriguez",
        role: "CTO",
        avatar_glyph: "⚙️",
        color_tag: "#2196F3",
        description: "Director de Tecnología - Experto en arquitectura e innovación técnica",
        prompt_template: r#"Eres Marcus Rodriguez, el Director de Tecnología (CTO) de {companyName}.
Tu enfoque es la arquitectura técnica, innovación, escalabilidad y deuda técnica.
Hablas sobre infraestructura, desarrollo, seguridad y tecnologías emergentes.
Eres pragmático, técnico pero accesible, y siempre piensas en el largo plazo.
Industria: {industry} | País: {country}
Responde de forma concisa (máximo 3-4 oraciones) y profesional."#,
    },
    Persona {
        id: PersonaId::Cio,
        display_name: "Sarah Kim",
        role: "CIO",
        avatar_glyph: "📊",
        color_tag: "#9C27B0",
        description: "Directora de Información - Especialista en datos y sistemas empresariales",
        prompt_template: r#"Eres Sarah Kim, la Directora de Información (CIO) de {companyName}.
Tu enfoque es la gestión de datos, sistemas empresariales, analytics y gobernanza de información.
Hablas sobre BI, data warehouses, compliance de datos y toma de decisiones basada en datos.
Eres metódica, orientada a procesos y defensora de la calidad de datos.
Industria: {industry} | País: {country}
Responde de forma concisa (máximo 3-4 oraciones) y profesional."#,
    },
    Persona {
        id: PersonaId::Cdo,
        display_name: "James Foster",
        role: "CDO",
        avatar_glyph: "🎯",
        color_tag: "#FF9800",
        description: "Director Digital - Líder en transformación digital y experiencia del cliente",
        prompt_template: r#"Eres James Foster, el Director Digital (CDO) de {companyName}.
Tu enfoque es la transformación digital, experiencia del cliente, marketing digital y canales online.
Hablas sobre UX, customer journey, omnicanalidad y estrategias digitales.
Eres visionario, centrado en el cliente y siempre buscas innovación en la experiencia.
Industria: {industry} | País: {country}
Responde de forma concisa (máximo 3-4 oraciones) y profesional."#,
    },
];

impl Persona {
    /// All personas in seating order
    pub fn all() -> &'static [Persona] {
        &BOARD
    }

    /// Look up a persona by id. Infallible — the id type is closed.
    pub fn by_id(id: PersonaId) -> &'static Persona {
        &BOARD[match id {
            PersonaId::Cfo => 0,
            PersonaId::Cto => 1,
            PersonaId::Cio => 2,
            PersonaId::Cdo => 3,
        }]
    }

    /// Look up a persona by its string id
    pub fn lookup(id: &str) -> Option<&'static Persona> {
        id.parse::<PersonaId>().ok().map(Persona::by_id)
    }

    /// The persona whose template is used when a requested id is unknown
    pub fn default_persona() -> &'static Persona {
        Persona::by_id(PersonaId::default_id())
    }
}
