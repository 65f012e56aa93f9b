    use super::*;
    use crate::catalog::{CategoryPriority, index};
    use crate::model::{AssetRecord, CatalogConfig, VariantConfig};
    use crate::view::{ViewQuery, view};

    fn record(id: &str, category: &str) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            tags: Vec::new(),
            preview_url: format!("https://x/{id}.png"),
            vector_url: None,
            size_label: None,
            filename: None,
            last_updated: None,
        }
    }

    #[test]
    fn rows_interleave_headers_and_assets() {
        let priority = CategoryPriority::new(&CatalogConfig::default().categories);
        let catalog = index(
            vec![
                record("a", "logos"),
                record("b", "icons"),
                record("c", "logos"),
            ],
            &priority,
        );
        let v = view(&catalog, &priority, VariantConfig::default(), &ViewQuery::default());
        let rows = build_rows(&v);

        assert_eq!(
            rows,
            vec![
                DisplayRow::Header {
                    title: "Icons".to_string(),
                    count: 1
                },
                DisplayRow::Asset(0),
                DisplayRow::Header {
                    title: "Logos".to_string(),
                    count: 2
                },
                DisplayRow::Asset(1),
                DisplayRow::Asset(2),
            ]
        );
        assert_eq!(row_of_asset(&rows, 1), Some(3));
        assert_eq!(row_of_asset(&rows, 9), None);
        assert_eq!(v.flat()[1].id, "a");
    }

    #[test]
    fn clamp_keeps_selection_in_range() {
        assert_eq!(clamp_selected(5, 0), 0);
        assert_eq!(clamp_selected(5, 3), 2);
        assert_eq!(clamp_selected(1, 3), 1);
    }

    fn choice(value: &str, selected: bool) -> Choice {
        Choice {
            value: value.to_string(),
            title: value.to_string(),
            count: 1,
            selected,
        }
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        let choices = vec![
            choice("all", false),
            choice("icons", false),
            choice("logos", true),
        ];
        assert_eq!(cycle_selection(&choices, true), Selection::All);
        assert_eq!(
            cycle_selection(&choices, false),
            Selection::parse("icons")
        );

        let none_selected = vec![choice("all", false), choice("icons", false)];
        assert_eq!(cycle_selection(&none_selected, false), Selection::All);
        assert_eq!(cycle_selection(&[], true), Selection::All);
    }
