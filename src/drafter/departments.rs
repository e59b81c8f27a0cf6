/// Addressing when no keyword matches, and for unknown department keys.
pub const FALLBACK_DEPARTMENT: &str = "General Administration Department";

/// Department routing table. Order is load-bearing: detection walks this
/// slice top to bottom and the first keyword hit wins, so an input touching
/// several departments is routed to the one declared earliest.
pub const DEPARTMENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Revenue",
        &["land", "property", "revenue", "mutation", "survey", "registration"],
    ),
    (
        "Health",
        &["health", "hospital", "medical", "doctor", "medicine", "ayushman", "healthcare"],
    ),
    (
        "Education",
        &["school", "education", "teacher", "student", "scholarship", "exam", "university"],
    ),
    (
        "PWD",
        &["road", "construction", "building", "infrastructure", "contractor", "tender"],
    ),
    (
        "Police",
        &["police", "fir", "crime", "security", "verification", "case"],
    ),
    (
        "Municipal",
        &["water", "drainage", "garbage", "municipal", "corporation", "civic", "tax"],
    ),
];

/// Formal display name a letter is addressed to.
pub fn display_name(short_name: &str) -> &'static str {
    match short_name {
        "Revenue" => "Revenue Department",
        "Health" => "Department of Health & Family Welfare",
        "Education" => "Department of Education",
        "PWD" => "Public Works Department",
        "Police" => "Police Department",
        "Municipal" => "Municipal Corporation",
        _ => FALLBACK_DEPARTMENT,
    }
}

/// Finds the addressed department for a query, falling back to the generic
/// department when nothing matches.
pub fn detect(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    for (dept, keywords) in DEPARTMENT_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return display_name(dept);
        }
    }
    FALLBACK_DEPARTMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_routes_to_department() {
        assert_eq!(detect("details of HOSPITAL staffing"), "Department of Health & Family Welfare");
        assert_eq!(detect("drainage work in ward 4"), "Municipal Corporation");
    }

    #[test]
    fn first_declared_department_wins_on_ties() {
        // "land" (Revenue) and "road" (PWD) both match; Revenue is declared
        // earlier in the table.
        assert_eq!(
            detect("land acquired for the new road project"),
            "Revenue Department"
        );
        // Reversed word order makes no difference.
        assert_eq!(
            detect("road built on acquired land"),
            "Revenue Department"
        );
    }

    #[test]
    fn no_keyword_falls_back_to_generic() {
        assert_eq!(detect("ration card application from last month"), FALLBACK_DEPARTMENT);
    }

    #[test]
    fn unknown_short_name_falls_back() {
        assert_eq!(display_name("Fisheries"), FALLBACK_DEPARTMENT);
    }
}
