    use super::*;
    use crate::model::{AssetRecord, CatalogConfig, ManifestInfo};
    use crate::remote::Fetch;

    fn loaded(version: &str, ids: &[&str]) -> LoadedManifest {
        LoadedManifest {
            info: ManifestInfo {
                name: "Library".to_string(),
                version: version.to_string(),
                updated: String::new(),
            },
            records: ids
                .iter()
                .map(|id| AssetRecord {
                    id: id.to_string(),
                    name: id.to_string(),
                    category: "icons".to_string(),
                    tags: Vec::new(),
                    preview_url: format!("https://x/{id}.png"),
                    vector_url: None,
                    size_label: None,
                    filename: None,
                    last_updated: None,
                })
                .collect(),
        }
    }

    fn session() -> CatalogSession {
        CatalogSession::new(CategoryPriority::new(&CatalogConfig::default().categories))
    }

    #[test]
    fn later_started_load_wins_when_it_finishes_first() {
        let mut s = session();
        let first = s.begin_load();
        let second = s.begin_load();
        assert!(s.is_loading());

        assert_eq!(
            s.complete(second, Ok(loaded("2", &["b"]))),
            LoadOutcome::Applied { records: 1 }
        );
        assert_eq!(s.complete(first, Ok(loaded("1", &["a", "a2"]))), LoadOutcome::Stale);

        assert_eq!(s.catalog().info().version, "2");
        assert!(!s.is_loading());
    }

    #[test]
    fn later_started_load_wins_when_it_finishes_last() {
        let mut s = session();
        let first = s.begin_load();
        let second = s.begin_load();

        assert_eq!(
            s.complete(first, Ok(loaded("1", &["a"]))),
            LoadOutcome::Applied { records: 1 }
        );
        assert!(s.is_loading());
        assert_eq!(
            s.complete(second, Ok(loaded("2", &["b", "c"]))),
            LoadOutcome::Applied { records: 2 }
        );
        assert_eq!(s.catalog().info().version, "2");
    }

    #[test]
    fn failure_keeps_previous_catalog() {
        let mut s = session();
        let t = s.begin_load();
        s.complete(t, Ok(loaded("1", &["a"])));
        let before = s.catalog();

        let t = s.begin_load();
        let err = CatalogError::fetch("https://x/metadata.json", Some(404));
        match s.complete(t, Err(err)) {
            LoadOutcome::Failed(e) => assert_eq!(e.status(), Some(404)),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(*s.catalog(), *before);
        assert!(!s.is_loading());
    }

    #[test]
    fn superseded_failure_is_not_reported() {
        let mut s = session();
        let first = s.begin_load();
        let second = s.begin_load();

        assert_eq!(
            s.complete(first, Err(CatalogError::fetch("u", None))),
            LoadOutcome::Stale
        );
        assert_eq!(
            s.complete(second, Ok(loaded("2", &["b"]))),
            LoadOutcome::Applied { records: 1 }
        );
    }

    #[test]
    fn older_success_after_newer_failure_is_discarded() {
        let mut s = session();
        let t = s.begin_load();
        s.complete(t, Ok(loaded("0", &["z"])));

        let first = s.begin_load();
        let second = s.begin_load();
        assert!(matches!(
            s.complete(second, Err(CatalogError::fetch("u", Some(500)))),
            LoadOutcome::Failed(_)
        ));
        assert_eq!(s.complete(first, Ok(loaded("1", &["a"]))), LoadOutcome::Stale);

        assert_eq!(s.catalog().info().version, "0");
        assert!(!s.is_loading());
    }

    #[test]
    fn loading_until_every_ticket_completes() {
        let mut s = session();
        let first = s.begin_load();
        let second = s.begin_load();

        s.complete(second, Ok(loaded("2", &["b"])));
        assert!(s.is_loading());

        s.complete(first, Ok(loaded("1", &["a"])));
        assert!(!s.is_loading());
        assert_eq!(s.catalog().info().version, "2");
    }

    #[test]
    fn snapshots_are_not_mutated_by_reload() {
        let mut s = session();
        let t = s.begin_load();
        s.complete(t, Ok(loaded("1", &["a"])));
        let held = s.catalog();

        let t = s.begin_load();
        s.complete(t, Ok(loaded("2", &["b", "c"])));
        assert_eq!(held.len(), 1);
        assert_eq!(s.catalog().len(), 2);
    }

    struct StaticFetch(Result<&'static str, u16>);

    impl Fetch for StaticFetch {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
            match self.0 {
                Ok(body) => Ok(body.as_bytes().to_vec()),
                Err(code) => Err(CatalogError::fetch(url, Some(code))),
            }
        }
    }

    #[test]
    fn load_now_runs_a_full_load() {
        let mut s = session();
        let ok = StaticFetch(Ok(
            r#"{"version": "3", "assets": [{"id": "a", "name": "A", "url": "u", "category": "Logos"}]}"#,
        ));
        let outcome = s.load_now(&ManifestLoader::new(&ok, false), "m");
        assert_eq!(outcome, LoadOutcome::Applied { records: 1 });
        assert_eq!(s.catalog().category_order()[0].as_str(), "logos");

        let missing = StaticFetch(Err(404));
        let outcome = s.load_now(&ManifestLoader::new(&missing, false), "m");
        assert!(matches!(outcome, LoadOutcome::Failed(ref e) if e.status() == Some(404)));
        assert_eq!(s.catalog().info().version, "3");
    }
