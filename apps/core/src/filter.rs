use crate::domain::{Exoplanet, Habitability};

/// Result of testing one criterion against one record. `NotApplicable`
/// covers both an inactive criterion and a record missing the field the
/// criterion reads; it always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Match,
    NoMatch,
    NotApplicable,
}

impl FilterOutcome {
    pub const fn passes(self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    const fn from_bool(matched: bool) -> Self {
        if matched {
            Self::Match
        } else {
            Self::NoMatch
        }
    }
}

/// Everything that narrows the grid. The same value is applied from every
/// entry point (search box, selectors, pagination).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub method: Option<String>,
    pub habitability: Option<Habitability>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.method.is_none() && self.habitability.is_none()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.method = None;
        self.habitability = None;
    }
}

pub fn search_outcome(planet: &Exoplanet, term: &str) -> FilterOutcome {
    let term = term.trim();
    if term.is_empty() {
        return FilterOutcome::NotApplicable;
    }

    let needle = term.to_lowercase();
    let in_name = planet.name.to_lowercase().contains(&needle);
    let in_host = planet
        .hostname
        .as_deref()
        .is_some_and(|host| host.to_lowercase().contains(&needle));

    FilterOutcome::from_bool(in_name || in_host)
}

/// Case-sensitive containment, matching the selector's option values.
pub fn method_outcome(planet: &Exoplanet, method: Option<&str>) -> FilterOutcome {
    let (Some(method), Some(value)) = (method, planet.discoverymethod.as_deref()) else {
        return FilterOutcome::NotApplicable;
    };

    FilterOutcome::from_bool(value.contains(method))
}

pub fn habitability_outcome(planet: &Exoplanet, filter: Option<Habitability>) -> FilterOutcome {
    let (Some(filter), Some(radius)) = (filter, planet.pl_rade) else {
        return FilterOutcome::NotApplicable;
    };

    FilterOutcome::from_bool(filter.admits(radius))
}

pub fn matches(planet: &Exoplanet, criteria: &Criteria) -> bool {
    search_outcome(planet, &criteria.search).passes()
        && method_outcome(planet, criteria.method.as_deref()).passes()
        && habitability_outcome(planet, criteria.habitability).passes()
}

/// Indices into `all` that survive `criteria`, in insertion order.
pub fn compute_view(all: &[Exoplanet], criteria: &Criteria) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter(|(_, planet)| matches(planet, criteria))
        .map(|(index, _)| index)
        .collect()
}

/// Distinct discovery methods in first-seen order, for the method selector.
pub fn method_options(all: &[Exoplanet]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for method in all.iter().filter_map(|planet| planet.discoverymethod.as_deref()) {
        if !options.iter().any(|known| known == method) {
            options.push(method.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(name: &str, host: Option<&str>, method: Option<&str>, radius: Option<f64>) -> Exoplanet {
        Exoplanet {
            hostname: host.map(str::to_string),
            discoverymethod: method.map(str::to_string),
            pl_rade: radius,
            ..Exoplanet::named(name)
        }
    }

    fn names(all: &[Exoplanet], view: &[usize]) -> Vec<String> {
        view.iter().map(|&index| all[index].name.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let all = vec![
            planet("Kepler-1b", None, None, None),
            planet("TRAPPIST-1e", None, None, None),
        ];
        let criteria = Criteria {
            search: "kepler".to_string(),
            ..Criteria::default()
        };

        assert_eq!(names(&all, &compute_view(&all, &criteria)), ["Kepler-1b"]);
    }

    #[test]
    fn search_matches_host_name() {
        let all = vec![
            planet("b", Some("TRAPPIST-1"), None, None),
            planet("c", Some("Kepler-22"), None, None),
        ];
        let criteria = Criteria {
            search: "trappist".to_string(),
            ..Criteria::default()
        };

        assert_eq!(names(&all, &compute_view(&all, &criteria)), ["b"]);
    }

    #[test]
    fn empty_search_is_not_applicable() {
        let subject = planet("Kepler-1b", None, None, None);
        assert_eq!(search_outcome(&subject, "   "), FilterOutcome::NotApplicable);
    }

    #[test]
    fn method_filter_is_case_sensitive_containment() {
        let subject = planet("a", None, Some("Transit Timing Variations"), None);
        assert_eq!(method_outcome(&subject, Some("Transit")), FilterOutcome::Match);
        assert_eq!(method_outcome(&subject, Some("transit")), FilterOutcome::NoMatch);
        assert_eq!(method_outcome(&subject, None), FilterOutcome::NotApplicable);
    }

    #[test]
    fn missing_method_passes_the_method_filter() {
        let subject = planet("a", None, None, None);
        assert_eq!(
            method_outcome(&subject, Some("Radial Velocity")),
            FilterOutcome::NotApplicable
        );
    }

    #[test]
    fn habitability_filter_uses_radius_boundaries() {
        let at = |radius| planet("x", None, None, Some(radius));
        let habitable = Some(Habitability::Habitable);

        assert_eq!(habitability_outcome(&at(0.5), habitable), FilterOutcome::Match);
        assert_eq!(habitability_outcome(&at(1.5), habitable), FilterOutcome::Match);
        assert_eq!(habitability_outcome(&at(0.4999), habitable), FilterOutcome::NoMatch);
        assert_eq!(
            habitability_outcome(&at(0.4999), Some(Habitability::Hot)),
            FilterOutcome::Match
        );
        assert_eq!(
            habitability_outcome(&at(1.5001), Some(Habitability::Cold)),
            FilterOutcome::Match
        );
    }

    #[test]
    fn missing_radius_passes_the_habitability_filter() {
        let subject = planet("x", None, None, None);
        assert_eq!(
            habitability_outcome(&subject, Some(Habitability::Cold)),
            FilterOutcome::NotApplicable
        );
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = vec![
            planet("Kepler-1b", None, Some("Transit"), Some(1.0)),
            planet("Kepler-2b", None, Some("Radial Velocity"), Some(1.0)),
            planet("Kepler-3b", None, Some("Transit"), Some(9.0)),
            planet("HD 1b", None, Some("Transit"), Some(1.0)),
        ];
        let criteria = Criteria {
            search: "kepler".to_string(),
            method: Some("Transit".to_string()),
            habitability: Some(Habitability::Habitable),
        };

        assert_eq!(names(&all, &compute_view(&all, &criteria)), ["Kepler-1b"]);
    }

    #[test]
    fn method_options_are_distinct_in_first_seen_order() {
        let all = vec![
            planet("a", None, Some("Transit"), None),
            planet("b", None, None, None),
            planet("c", None, Some("Imaging"), None),
            planet("d", None, Some("Transit"), None),
        ];
        assert_eq!(method_options(&all), ["Transit", "Imaging"]);
    }
}
