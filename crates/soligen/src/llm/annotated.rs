//! Annotated text generation.
//!
//! The model is shown the tag vocabulary with real examples from the
//! taxonomy and asked to write legal text using placeholders. Its reply is
//! then formatted with span tracking, so every sampled value in the final
//! text comes with its tag and class identity.

use bon::Builder;
use rand::seq::SliceRandom;
use serde::Serialize;
use soligen_vocab::TaxonomyCategory;
use tracing::{debug, warn};

use super::error::GenerateError;
use super::model::TextModel;
use super::prompt::{format_instructions, format_prompt};
use crate::config::GeneratorConfig;
use crate::formatter::TemplateFormatter;
use crate::types::AnnotatedText;

/// Example templates shown to the model.
pub const ANNOTATED_EXAMPLES: [&str; 3] = [
    "This <|document_artifact|> was filed on <|date|> by <|actor_player|> before the <|governmental_body|>.",
    "On or about <|date|>, <|actor_player|> filed a <|document_artifact|> with the <|forums_and_venues|>.",
    "<|company|>, a <|industry|> leader, is located in <|location|>.",
];

/// One taxonomy class shown as an example of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagExample {
    pub label: String,
    pub definition: String,
}

#[derive(Builder)]
pub struct AnnotatedTextGenerator<'a> {
    model: &'a dyn TextModel,
    formatter: TemplateFormatter<'a>,
    #[builder(default)]
    config: GeneratorConfig,
}

impl<'a> AnnotatedTextGenerator<'a> {
    /// Up to `num_examples` random classes per taxonomy category, drawn
    /// from `example_depth` levels below the category root.
    ///
    /// Classes without any usable label are skipped.
    pub fn tag_examples(&mut self) -> Vec<(&'static str, Vec<TagExample>)> {
        let taxonomy = self.formatter.taxonomy();
        let mut examples = Vec::with_capacity(TaxonomyCategory::ALL.len());

        for category in TaxonomyCategory::ALL {
            let tag = category.tag_name();
            let members = taxonomy.list_members(tag, self.config.example_depth);
            if members.is_empty() {
                warn!(tag, "no taxonomy members for tag examples");
            }
            let picked: Vec<TagExample> = members
                .choose_multiple(self.formatter.rng(), self.config.num_examples)
                .filter_map(|class| {
                    let label = class.label_choices().choose(self.formatter.rng())?.to_string();
                    Some(TagExample {
                        label,
                        definition: class.definition.clone(),
                    })
                })
                .collect();
            examples.push((tag, picked));
        }

        examples
    }

    /// The full prompt for one annotated sample.
    pub fn prompt(&mut self) -> Result<String, GenerateError> {
        self.config.validate()?;
        let document_type = self
            .formatter
            .sample_tag("document_artifact", self.config.example_depth)?;

        let tag_examples = self
            .tag_examples()
            .into_iter()
            .map(|(tag, examples)| {
                let mut section = format!("{tag}:\n");
                for example in examples {
                    if example.definition.is_empty() {
                        section.push_str(&format!("- {}\n", example.label));
                    } else {
                        section.push_str(&format!("- {}: {}\n", example.label, example.definition));
                    }
                }
                section
            })
            .collect::<Vec<_>>()
            .join("\n");

        let tags = self
            .formatter
            .vocabulary()
            .registry()
            .names()
            .map(|name| format!("<|{name}|>"))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format_prompt(&[
            ("examples", ANNOTATED_EXAMPLES.join("\n")),
            ("tag_examples", tag_examples),
            ("tags", tags),
            (
                "instructions",
                format_instructions(&[
                    "Carefully review the Tags and Tag Examples above.".to_string(),
                    format!("Draft realistic legal text from a {}.", document_type.value),
                    "Use the Tags above as placeholders in the text.".to_string(),
                    "Only use the Tags listed above.  Do not make up your own tags.".to_string(),
                    "Do not respond with any other text or explanation.".to_string(),
                ]),
            ),
        ]))
    }

    /// Ask the model for a template and format it with spans.
    pub fn generate(&mut self) -> Result<AnnotatedText, GenerateError> {
        let prompt = self.prompt()?;
        debug!(model = self.model.model_name(), chars = prompt.len(), "generating template");
        let template = self.model.complete(&prompt)?.text;
        Ok(self.formatter.format_spans(&template)?)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
