//! Built-in sampling functions.

use rand::Rng;
use rand::seq::SliceRandom;
use soligen_vocab::SyntheticField;

use super::context::SampleContext;
use super::error::ResolveError;
use super::registry::{SampleFn, TagSpec};
use crate::types::{Sample, Value};

/// Sample a label from a random member of the tag's taxonomy category.
///
/// The member is drawn uniformly from the category, then the label is drawn
/// uniformly from the member's label choices.
pub fn sample_taxonomy(
    spec: &TagSpec,
    ctx: &mut SampleContext<'_>,
) -> Result<Sample, ResolveError> {
    let category = spec.source.category().unwrap_or(&spec.name);
    let max_depth = ctx.max_depth();
    let members = ctx.taxonomy().list_members(category, max_depth);
    let member = members
        .choose(ctx.rng())
        .ok_or_else(|| ResolveError::EmptyCategory {
            category: category.to_string(),
            max_depth,
        })?;
    let label = member
        .label_choices()
        .choose(ctx.rng())
        .map(|label| (*label).to_string())
        .ok_or_else(|| ResolveError::EmptyLabelSet {
            tag: spec.name.clone(),
            iri: member.iri.clone(),
        })?;
    Ok(Sample::new(label, member.iri.clone()))
}

/// Sampling function for a built-in synthetic field.
pub fn synthetic_sampler(field: SyntheticField) -> SampleFn {
    match field {
        SyntheticField::Address => sample_address,
        SyntheticField::Company => sample_company,
        SyntheticField::Date => sample_date,
        SyntheticField::Time => sample_time,
        SyntheticField::Email => sample_email,
        SyntheticField::Filename => sample_file_name,
        SyntheticField::FirstName => sample_first_name,
        SyntheticField::LastName => sample_last_name,
        SyntheticField::Name => sample_name,
        SyntheticField::Job => sample_job,
    }
}

/// Sample any built-in synthetic field by value.
pub fn sample_synthetic(
    field: SyntheticField,
    spec: &TagSpec,
    ctx: &mut SampleContext<'_>,
) -> Result<Sample, ResolveError> {
    synthetic_sampler(field)(spec, ctx)
}

fn sample_address(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().address(), spec.name.as_str()))
}

fn sample_company(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().company(), spec.name.as_str()))
}

/// Dates pick uniformly among past, future, and this-decade.
fn sample_date(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    let choice = ctx.rng().gen_range(0..3);
    let (date, variant) = match choice {
        0 => (ctx.records().past_date(), "past"),
        1 => (ctx.records().future_date(), "future"),
        _ => (ctx.records().date_this_decade(), "this_decade"),
    };
    Ok(Sample::new(
        Value::Date(date),
        format!("{}:{variant}", spec.name),
    ))
}

fn sample_time(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(Value::Time(ctx.records().time()), spec.name.as_str()))
}

fn sample_email(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().email(), spec.name.as_str()))
}

fn sample_file_name(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().file_name(), spec.name.as_str()))
}

fn sample_first_name(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().first_name(), spec.name.as_str()))
}

fn sample_last_name(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().last_name(), spec.name.as_str()))
}

fn sample_name(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().name(), spec.name.as_str()))
}

fn sample_job(spec: &TagSpec, ctx: &mut SampleContext<'_>) -> Result<Sample, ResolveError> {
    Ok(Sample::new(ctx.records().job(), spec.name.as_str()))
}
