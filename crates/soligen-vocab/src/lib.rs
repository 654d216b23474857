//! Shared tag vocabulary used by both the template engine and the CLI.
//!
//! This crate centralizes tag naming (taxonomy categories and synthetic
//! record fields) so the matching grammar, the resolver dispatch table, and
//! the CLI listings cannot drift apart.

/// Taxonomy categories that can be referenced from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaxonomyCategory {
    ActorPlayer,
    AreaOfLaw,
    AssetType,
    CommunicationModality,
    Currency,
    DataFormat,
    DocumentArtifact,
    EngagementTerms,
    Event,
    ForumsAndVenues,
    GovernmentalBody,
    Industry,
    Language,
    SoliType,
    LegalAuthorities,
    LegalEntity,
    Location,
    MatterNarrative,
    MatterNarrativeFormat,
    Objectives,
    Service,
    StandardsCompatibility,
    Status,
    SystemIdentifiers,
}

impl TaxonomyCategory {
    /// Every category, in canonical order.
    pub const ALL: [TaxonomyCategory; 24] = [
        TaxonomyCategory::ActorPlayer,
        TaxonomyCategory::AreaOfLaw,
        TaxonomyCategory::AssetType,
        TaxonomyCategory::CommunicationModality,
        TaxonomyCategory::Currency,
        TaxonomyCategory::DataFormat,
        TaxonomyCategory::DocumentArtifact,
        TaxonomyCategory::EngagementTerms,
        TaxonomyCategory::Event,
        TaxonomyCategory::ForumsAndVenues,
        TaxonomyCategory::GovernmentalBody,
        TaxonomyCategory::Industry,
        TaxonomyCategory::Language,
        TaxonomyCategory::SoliType,
        TaxonomyCategory::LegalAuthorities,
        TaxonomyCategory::LegalEntity,
        TaxonomyCategory::Location,
        TaxonomyCategory::MatterNarrative,
        TaxonomyCategory::MatterNarrativeFormat,
        TaxonomyCategory::Objectives,
        TaxonomyCategory::Service,
        TaxonomyCategory::StandardsCompatibility,
        TaxonomyCategory::Status,
        TaxonomyCategory::SystemIdentifiers,
    ];

    /// Human-readable label of the category as it appears in the taxonomy.
    pub fn label(self) -> &'static str {
        match self {
            TaxonomyCategory::ActorPlayer => "Actor / Player",
            TaxonomyCategory::AreaOfLaw => "Area of Law",
            TaxonomyCategory::AssetType => "Asset Type",
            TaxonomyCategory::CommunicationModality => "Communication Modality",
            TaxonomyCategory::Currency => "Currency",
            TaxonomyCategory::DataFormat => "Data Format",
            TaxonomyCategory::DocumentArtifact => "Document / Artifact",
            TaxonomyCategory::EngagementTerms => "Engagement Terms",
            TaxonomyCategory::Event => "Event",
            TaxonomyCategory::ForumsAndVenues => "Forums and Venues",
            TaxonomyCategory::GovernmentalBody => "Governmental Body",
            TaxonomyCategory::Industry => "Industry",
            TaxonomyCategory::Language => "Language",
            TaxonomyCategory::SoliType => "SOLI Type",
            TaxonomyCategory::LegalAuthorities => "Legal Authorities",
            TaxonomyCategory::LegalEntity => "Legal Entity",
            TaxonomyCategory::Location => "Location",
            TaxonomyCategory::MatterNarrative => "Matter Narrative",
            TaxonomyCategory::MatterNarrativeFormat => "Matter Narrative Format",
            TaxonomyCategory::Objectives => "Objectives",
            TaxonomyCategory::Service => "Service",
            TaxonomyCategory::StandardsCompatibility => "Standards Compatibility",
            TaxonomyCategory::Status => "Status",
            TaxonomyCategory::SystemIdentifiers => "System Identifiers",
        }
    }

    /// Normalized tag name (e.g. `actor_player` for "Actor / Player").
    pub fn tag_name(self) -> &'static str {
        match self {
            TaxonomyCategory::ActorPlayer => "actor_player",
            TaxonomyCategory::AreaOfLaw => "area_of_law",
            TaxonomyCategory::AssetType => "asset_type",
            TaxonomyCategory::CommunicationModality => "communication_modality",
            TaxonomyCategory::Currency => "currency",
            TaxonomyCategory::DataFormat => "data_format",
            TaxonomyCategory::DocumentArtifact => "document_artifact",
            TaxonomyCategory::EngagementTerms => "engagement_terms",
            TaxonomyCategory::Event => "event",
            TaxonomyCategory::ForumsAndVenues => "forums_and_venues",
            TaxonomyCategory::GovernmentalBody => "governmental_body",
            TaxonomyCategory::Industry => "industry",
            TaxonomyCategory::Language => "language",
            TaxonomyCategory::SoliType => "soli_type",
            TaxonomyCategory::LegalAuthorities => "legal_authorities",
            TaxonomyCategory::LegalEntity => "legal_entity",
            TaxonomyCategory::Location => "location",
            TaxonomyCategory::MatterNarrative => "matter_narrative",
            TaxonomyCategory::MatterNarrativeFormat => "matter_narrative_format",
            TaxonomyCategory::Objectives => "objectives",
            TaxonomyCategory::Service => "service",
            TaxonomyCategory::StandardsCompatibility => "standards_compatibility",
            TaxonomyCategory::Status => "status",
            TaxonomyCategory::SystemIdentifiers => "system_identifiers",
        }
    }
}

/// Fields produced by the synthetic record generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntheticField {
    Address,
    Company,
    Date,
    Time,
    Email,
    Filename,
    FirstName,
    LastName,
    Name,
    Job,
}

impl SyntheticField {
    /// Every field, in canonical order.
    pub const ALL: [SyntheticField; 10] = [
        SyntheticField::Address,
        SyntheticField::Company,
        SyntheticField::Date,
        SyntheticField::Time,
        SyntheticField::Email,
        SyntheticField::Filename,
        SyntheticField::FirstName,
        SyntheticField::LastName,
        SyntheticField::Name,
        SyntheticField::Job,
    ];

    /// Tag name of the field.
    pub fn tag_name(self) -> &'static str {
        match self {
            SyntheticField::Address => "address",
            SyntheticField::Company => "company",
            SyntheticField::Date => "date",
            SyntheticField::Time => "time",
            SyntheticField::Email => "email",
            SyntheticField::Filename => "filename",
            SyntheticField::FirstName => "first_name",
            SyntheticField::LastName => "last_name",
            SyntheticField::Name => "name",
            SyntheticField::Job => "job",
        }
    }
}

/// Which value source a recognized tag draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Taxonomy(TaxonomyCategory),
    Synthetic(SyntheticField),
}

impl TagKind {
    /// Normalized tag name for this kind.
    pub fn tag_name(self) -> &'static str {
        match self {
            TagKind::Taxonomy(category) => category.tag_name(),
            TagKind::Synthetic(field) => field.tag_name(),
        }
    }
}

/// Normalize a tag name.
///
/// Lowercases, collapses every run of characters that are not alphanumeric
/// (underscores included) into a single `_`, and trims leading and trailing
/// underscores.
pub fn normalize_tag(tag: &str) -> String {
    let mut normalized = String::with_capacity(tag.len());
    let mut pending_separator = false;
    for c in tag.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    normalized
}

/// Resolve a tag name to its kind.
///
/// The name is matched exactly; callers holding raw labels should run them
/// through [`normalize_tag`] first.
pub fn resolve_tag(name: &str) -> Option<TagKind> {
    if let Some(category) = TaxonomyCategory::ALL
        .into_iter()
        .find(|c| c.tag_name() == name)
    {
        return Some(TagKind::Taxonomy(category));
    }
    SyntheticField::ALL
        .into_iter()
        .find(|f| f.tag_name() == name)
        .map(TagKind::Synthetic)
}

/// All accepted tag names: taxonomy categories first, then synthetic fields.
///
/// Used for grammar construction, diagnostics, and typo suggestions.
pub fn accepted_tag_names() -> Vec<&'static str> {
    TaxonomyCategory::ALL
        .into_iter()
        .map(TaxonomyCategory::tag_name)
        .chain(SyntheticField::ALL.into_iter().map(SyntheticField::tag_name))
        .collect()
}
