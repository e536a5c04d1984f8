//! Pipeline stage labels.

/// Where in the linear resolve flow an event (or failure) occurred.
///
/// The flow never backtracks: each stage either advances to the next or
/// moves the whole resolve to its error terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Identifying,
    CatalogLookup,
    Searching,
    Normalizing,
    DistanceAnnotating,
    Sorting,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PipelineStage::Identifying => "identifying",
            PipelineStage::CatalogLookup => "catalog-lookup",
            PipelineStage::Searching => "searching",
            PipelineStage::Normalizing => "normalizing",
            PipelineStage::DistanceAnnotating => "distance-annotating",
            PipelineStage::Sorting => "sorting",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_a_kebab_case_label() {
        let stages = [
            (PipelineStage::Identifying, "identifying"),
            (PipelineStage::CatalogLookup, "catalog-lookup"),
            (PipelineStage::Searching, "searching"),
            (PipelineStage::Normalizing, "normalizing"),
            (PipelineStage::DistanceAnnotating, "distance-annotating"),
            (PipelineStage::Sorting, "sorting"),
        ];
        for (stage, label) in stages {
            assert_eq!(stage.to_string(), label);
        }
    }
}
