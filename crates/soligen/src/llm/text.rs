//! Plain text generation from random background facts.

use bon::Builder;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::error::GenerateError;
use super::model::TextModel;
use super::prompt::{format_instructions, format_prompt};
use crate::config::GeneratorConfig;
use crate::formatter::TemplateFormatter;

/// Tags eligible for background facts, with the label shown in the prompt.
pub const PROCEDURAL_TYPES: [(&str, &str); 14] = [
    ("actor_player", "Actor/Player"),
    ("address", "Address"),
    ("area_of_law", "Area of Law"),
    ("asset_type", "Asset Type"),
    ("company", "Company"),
    ("date", "Date"),
    ("document_artifact", "Document Artifact"),
    ("event", "Event"),
    ("forums_and_venues", "Forum/Venue"),
    ("industry", "Industry"),
    ("location", "Location"),
    ("name", "Name"),
    ("objectives", "Objectives"),
    ("service", "Services"),
];

const VERBS: [&str; 10] = [
    "Write",
    "Draft",
    "Compose",
    "Create",
    "Generate",
    "Produce",
    "Author",
    "Craft",
    "Formulate",
    "Construct",
];
const TEXT_UNITS: [&str; 2] = ["paragraph(s)", "sentence(s)"];
const PERSONS: [&str; 3] = ["first", "second", "third"];
const TENSES: [&str; 7] = [
    "past",
    "present",
    "future",
    "imperfect",
    "conditional",
    "subjunctive",
    "imperative",
];

/// Generates realistic legal text by prompting a model with randomly sampled
/// background facts and drafting instructions.
#[derive(Builder)]
pub struct TextGenerator<'a> {
    model: &'a dyn TextModel,
    formatter: TemplateFormatter<'a>,
    #[builder(default)]
    config: GeneratorConfig,
}

impl<'a> TextGenerator<'a> {
    /// Background facts: a handful of `Label: value` lines and a document
    /// type drawn from the taxonomy.
    pub fn random_background(&mut self) -> Result<String, GenerateError> {
        self.config.validate()?;
        let document_type = self
            .formatter
            .sample_tag("document_artifact", self.config.example_depth)?;

        let count = self
            .formatter
            .rng()
            .gen_range(self.config.min_types..=self.config.max_types)
            .min(PROCEDURAL_TYPES.len());
        let mut types = PROCEDURAL_TYPES;
        types.shuffle(self.formatter.rng());

        let template: String = types[..count]
            .iter()
            .map(|(tag, label)| format!("{label}: <|{tag}|>\n"))
            .collect();
        let mut background = self.formatter.format(&template)?;
        background.push_str(&format!("Document Type: {}\n", document_type.value));
        Ok(background)
    }

    /// Randomized drafting instructions.
    pub fn random_instructions(&mut self) -> Result<String, GenerateError> {
        self.config.validate()?;
        let rng = self.formatter.rng();
        let verb = VERBS.choose(rng).copied().unwrap_or(VERBS[0]);
        let length = rng.gen_range(self.config.min_text_length..=self.config.max_text_length);
        let unit = TEXT_UNITS.choose(rng).copied().unwrap_or(TEXT_UNITS[0]);
        let person = PERSONS.choose(rng).copied().unwrap_or(PERSONS[0]);
        let tense = TENSES.choose(rng).copied().unwrap_or(TENSES[0]);

        Ok(format_prompt(&[(
            "instructions",
            format_instructions(&[
                "Carefully review the Background information above.".to_string(),
                format!(
                    "{verb} {length} {unit} in the {person} person and {tense} tense that would occur in the Document Type above."
                ),
                "Do not respond with any other tokens or explanation.  Just return the realistic text from the Document Type above.".to_string(),
            ]),
        )]))
    }

    /// The full prompt: background, a blank line, then instructions.
    pub fn prompt(&mut self) -> Result<String, GenerateError> {
        let background = self.random_background()?;
        let instructions = self.random_instructions()?;
        Ok(format!("{background}\n{instructions}"))
    }

    /// Build a prompt and return the model's text.
    pub fn generate(&mut self) -> Result<String, GenerateError> {
        let prompt = self.prompt()?;
        debug!(model = self.model.model_name(), chars = prompt.len(), "generating text");
        Ok(self.model.complete(&prompt)?.text)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
