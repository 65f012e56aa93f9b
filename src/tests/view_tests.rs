    use super::*;
    use crate::catalog::index;
    use crate::model::{CatalogConfig, normalize_category};

    fn record(id: &str, name: &str, category: &str, tags: &[&str]) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: normalize_category(Some(category)),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            preview_url: format!("https://x/{id}.png"),
            vector_url: None,
            size_label: None,
            filename: None,
            last_updated: None,
        }
    }

    fn fixture() -> (Catalog, CategoryPriority) {
        let priority = CategoryPriority::new(&CatalogConfig::default().categories);
        let records = vec![
            record("i1", "Arrow Left", "icons", &["navigation"]),
            record("l1", "Wordmark", "logos", &["brand"]),
            record("i2", "Arrow Right", "Icons", &[]),
            record("m1", "Mystery", "", &[]),
            record("b1", "Bee Happy", "ebees", &["mascot"]),
        ];
        (index(records, &priority), priority)
    }

    fn ids(view: &CatalogView<'_>) -> Vec<String> {
        view.flat().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn all_selection_covers_every_record_in_category_order() {
        let (catalog, priority) = fixture();
        let v = view(
            &catalog,
            &priority,
            VariantConfig::default(),
            &ViewQuery::default(),
        );

        let titles: Vec<&str> = v.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["eBees", "Icons", "Logos", "Other"]);
        assert_eq!(v.record_count(), catalog.len());
        assert_eq!(ids(&v), vec!["b1", "i1", "i2", "l1", "m1"]);
    }

    #[test]
    fn category_selection_returns_that_bucket() {
        let (catalog, priority) = fixture();
        let q = ViewQuery::category(Selection::parse("ICONS"));
        let v = view(&catalog, &priority, VariantConfig::default(), &q);
        assert_eq!(v.sections.len(), 1);
        assert_eq!(v.sections[0].records, catalog.bucket(&CategoryKey::from_label("icons")));
    }

    #[test]
    fn unknown_selection_yields_no_sections() {
        let (catalog, priority) = fixture();
        let q = ViewQuery::category(Selection::parse("nonexistent"));
        let v = view(&catalog, &priority, VariantConfig::default(), &q);
        assert!(v.sections.is_empty());

        // Choices are still offered so the host can switch back.
        assert!(v.choices.iter().all(|c| !c.selected));
        assert_eq!(v.choices[0].value, ALL_VALUE);
    }

    #[test]
    fn choices_list_all_then_categories_with_counts() {
        let (catalog, priority) = fixture();
        let q = ViewQuery::category(Selection::parse("logos"));
        let v = view(&catalog, &priority, VariantConfig::default(), &q);

        let labels: Vec<String> = v.choices.iter().map(Choice::label).collect();
        assert_eq!(
            labels,
            vec![
                "All Assets (5)",
                "eBees (1)",
                "Icons (2)",
                "Logos (1)",
                "Other (1)"
            ]
        );
        let selected: Vec<&str> = v
            .choices
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(selected, vec!["logos"]);
    }

    #[test]
    fn no_category_filter_forces_all() {
        let (catalog, priority) = fixture();
        let variant = VariantConfig {
            has_category_filter: false,
            vector_capable: false,
        };
        let q = ViewQuery::category(Selection::parse("logos"));
        let v = view(&catalog, &priority, variant, &q);
        assert!(v.choices.is_empty());
        assert_eq!(v.record_count(), catalog.len());
    }

    #[test]
    fn search_matches_name_id_and_tags() {
        let (catalog, priority) = fixture();
        let search = |s: &str| {
            let q = ViewQuery {
                selection: Selection::All,
                search: Some(s.to_string()),
            };
            ids(&view(&catalog, &priority, VariantConfig::default(), &q))
        };

        assert_eq!(search("arrow"), vec!["i1", "i2"]);
        assert_eq!(search("L1"), vec!["l1"]);
        assert_eq!(search("MASCOT"), vec!["b1"]);
        assert_eq!(search("   ").len(), catalog.len());
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn search_drops_emptied_sections() {
        let (catalog, priority) = fixture();
        let q = ViewQuery {
            selection: Selection::All,
            search: Some("brand".to_string()),
        };
        let v = view(&catalog, &priority, VariantConfig::default(), &q);
        let titles: Vec<&str> = v.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Logos"]);
    }

    #[test]
    fn empty_catalog_has_only_all_choice() {
        let priority = CategoryPriority::default();
        let catalog = Catalog::empty();
        let v = view(&catalog, &priority, VariantConfig::default(), &ViewQuery::default());
        assert!(v.sections.is_empty());
        assert_eq!(v.choices.len(), 1);
        assert_eq!(v.choices[0].label(), "All Assets (0)");
        assert!(v.choices[0].selected);
    }

    #[test]
    fn selection_parse_round_trips_value() {
        assert_eq!(Selection::parse(" All "), Selection::All);
        let s = Selection::parse("Logos");
        assert_eq!(s.value(), "logos");
    }
