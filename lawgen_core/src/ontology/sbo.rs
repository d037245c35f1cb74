//! Resolution of Systems Biology Ontology terms and CellDesigner type names into [`Role`]s
use super::{Role, RoleResolver};

/// SBO term numbers and the role each of them stands for
const SBO_TERMS: &[(u32, Role)] = &[
    // Entities
    (243, Role::Gene),
    (335, Role::GeneCodingRegion),
    (250, Role::Rna),
    (278, Role::MessengerRna),
    (334, Role::AntisenseRna),
    (252, Role::Protein),
    (245, Role::Macromolecule),
    (253, Role::Complex),
    (247, Role::SimpleMolecule),
    (327, Role::Ion),
    (244, Role::Receptor),
    (285, Role::Unknown),
    (291, Role::EmptySet),
    // Modifiers
    (13, Role::Catalyst),
    (172, Role::Catalyst),
    (460, Role::EnzymaticCatalyst),
    (20, Role::Inhibitor),
    (169, Role::Inhibitor),
    (206, Role::Inhibitor),
    (207, Role::Inhibitor),
    (459, Role::Stimulator),
    (170, Role::Stimulator),
    (461, Role::Activator),
    (462, Role::Activator),
    (171, Role::Trigger),
    (19, Role::Modifier),
    (168, Role::Modifier),
    // Processes
    (183, Role::Transcription),
    (184, Role::Translation),
    (182, Role::StateTransition),
    (176, Role::BiochemicalReaction),
    (185, Role::Transport),
];

/// Default [`RoleResolver`]
///
/// Accepts `SBO:0000243`, `0000243` and `243` style codes as well as CellDesigner species and
/// modification names such as `GENE` or `TRANSCRIPTIONAL_INHIBITION` (case-insensitive).
///
/// # Examples
/// ```rust
/// use lawgen_core::ontology::{Role, RoleResolver, SboRoleResolver};
/// let resolver = SboRoleResolver;
/// assert_eq!(resolver.role_of("SBO:0000243"), Role::Gene);
/// assert_eq!(resolver.role_of("transcriptional_activation"), Role::TranscriptionalActivator);
/// assert_eq!(resolver.role_of("nonsense"), Role::Unclassified);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SboRoleResolver;

impl RoleResolver for SboRoleResolver {
    fn role_of(&self, code: &str) -> Role {
        let code = code.trim();
        if let Some(term) = parse_sbo_term(code) {
            return SBO_TERMS
                .iter()
                .find(|(t, _)| *t == term)
                .map(|(_, role)| *role)
                .unwrap_or(Role::Unclassified);
        }
        role_from_alias(code)
    }
}

/// Parse the numeric part of an SBO term, returns None if the code is not an SBO term
pub fn parse_sbo_term(code: &str) -> Option<u32> {
    let digits = match code.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("sbo:") => &code[4..],
        _ => code,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format an SBO term number the canonical way, e.g. `SBO:0000243`
pub fn format_sbo_term(term: u32) -> String {
    format!("SBO:{:07}", term)
}

fn role_from_alias(code: &str) -> Role {
    let normalized: String = code
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    match normalized.as_str() {
        "GENE" => Role::Gene,
        "GENE_CODING_REGION" => Role::GeneCodingRegion,
        "RNA" => Role::Rna,
        "MRNA" | "MESSENGER_RNA" => Role::MessengerRna,
        "ANTISENSE_RNA" => Role::AntisenseRna,
        "PROTEIN" => Role::Protein,
        "GENERIC" | "MACROMOLECULE" => Role::Macromolecule,
        "COMPLEX" => Role::Complex,
        "SIMPLE_MOLECULE" | "DRUG" => Role::SimpleMolecule,
        "ION" => Role::Ion,
        "RECEPTOR" | "ION_CHANNEL" => Role::Receptor,
        "TRUNCATED" => Role::Truncated,
        "UNKNOWN" => Role::Unknown,
        "DEGRADED" | "EMPTY_SET" => Role::EmptySet,
        "CATALYSIS" | "UNKNOWN_CATALYSIS" | "CATALYST" => Role::Catalyst,
        "ENZYMATIC_CATALYSIS" | "ENZYME" => Role::EnzymaticCatalyst,
        "INHIBITION" | "UNKNOWN_INHIBITION" | "INHIBITOR" => Role::Inhibitor,
        "TRANSCRIPTIONAL_INHIBITION" => Role::TranscriptionalInhibitor,
        "TRANSLATIONAL_INHIBITION" => Role::TranslationalInhibitor,
        "ACTIVATION" | "ACTIVATOR" => Role::Activator,
        "TRANSCRIPTIONAL_ACTIVATION" => Role::TranscriptionalActivator,
        "TRANSLATIONAL_ACTIVATION" => Role::TranslationalActivator,
        "PHYSICAL_STIMULATION" | "STIMULATION" | "STIMULATOR" => Role::Stimulator,
        "TRIGGER" => Role::Trigger,
        "MODULATION" | "MODIFIER" => Role::Modifier,
        "TRANSCRIPTION" => Role::Transcription,
        "TRANSLATION" => Role::Translation,
        "STATE_TRANSITION" => Role::StateTransition,
        "TRANSPORT" => Role::Transport,
        "BIOCHEMICAL_REACTION" => Role::BiochemicalReaction,
        _ => Role::Unclassified,
    }
}
