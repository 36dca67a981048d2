use super::error::ValidationError;
use std::collections::HashMap;

/// Ordered list of distinct chemical species.
///
/// The order defines both the neighbor-slot axis of a LODE feature tensor and the
/// canonical ordering of (center, neighbor) pairs in a feature vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesList {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl SpeciesList {
    pub fn new<I, S>(labels: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ValidationError::EmptySpeciesList);
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(ValidationError::DuplicateSpecies {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels, index })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Resolves every label to its position in the list.
    pub(crate) fn resolve_all<L: AsRef<str>>(
        &self,
        labels: &[L],
    ) -> Result<Vec<usize>, ValidationError> {
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.index_of(label)
                    .ok_or_else(|| ValidationError::UnknownSpecies {
                        label: label.to_string(),
                    })
            })
            .collect()
    }
}

/// Anything that exposes one chemical label per atom.
pub trait SpeciesLabels {
    fn species_labels(&self) -> &[String];
}

impl SpeciesLabels for [String] {
    fn species_labels(&self) -> &[String] {
        self
    }
}

impl SpeciesLabels for Vec<String> {
    fn species_labels(&self) -> &[String] {
        self
    }
}

impl<T: SpeciesLabels + ?Sized> SpeciesLabels for &T {
    fn species_labels(&self) -> &[String] {
        (**self).species_labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_order_and_indexes_labels() {
        let species = SpeciesList::new(["O", "H", "Na"]).unwrap();
        assert_eq!(species.len(), 3);
        assert_eq!(species.index_of("O"), Some(0));
        assert_eq!(species.index_of("H"), Some(1));
        assert_eq!(species.index_of("Na"), Some(2));
        assert_eq!(species.iter().collect::<Vec<_>>(), vec!["O", "H", "Na"]);
    }

    #[test]
    fn new_rejects_duplicate_labels() {
        let result = SpeciesList::new(["O", "H", "O"]);
        assert_eq!(
            result,
            Err(ValidationError::DuplicateSpecies {
                label: "O".to_string()
            })
        );
    }

    #[test]
    fn new_rejects_empty_list() {
        let result = SpeciesList::new(Vec::<String>::new());
        assert_eq!(result, Err(ValidationError::EmptySpeciesList));
    }

    #[test]
    fn index_of_returns_none_for_unknown_label() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        assert_eq!(species.index_of("Cl"), None);
    }

    #[test]
    fn resolve_all_reports_first_unknown_label() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        assert_eq!(
            species.resolve_all(&["H", "Cl", "K"]),
            Err(ValidationError::UnknownSpecies {
                label: "Cl".to_string()
            })
        );
    }
}
