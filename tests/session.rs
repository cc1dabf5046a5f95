#[cfg(test)]
mod verify {
    use taglight::host::{Document, DocumentKind, RenderSink, Session};
    use taglight::language::{ColorGroup, Rule};

    /// Stands in for an editor's decoration store: tracks how many style
    /// resources are live, and how many were ever created.
    #[derive(Default)]
    struct CountingSink {
        active: usize,
        created: usize,
        releases: usize,
        applies: usize,
    }

    impl RenderSink for CountingSink {
        fn release(&mut self) {
            self.active = 0;
            self.releases += 1;
        }

        fn apply(&mut self, _text: &str, groups: &[ColorGroup<'_>]) {
            self.active += groups.len();
            self.created += groups.len();
            self.applies += 1;
        }
    }

    fn rule(path: &str, foreground: &str) -> Rule {
        Rule {
            path: path.to_string(),
            foreground: Some(foreground.to_string()),
            background: None,
        }
    }

    fn xml(text: &str) -> Document {
        Document {
            kind: DocumentKind::Xml,
            text: text.to_string(),
        }
    }

    #[test]
    fn resources_do_not_accumulate() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("a", "red"), rule("a/*", "blue")]);
        session.document_changed(Some(xml("<a><b/></a>")));

        // one red group for 'a', one blue group for 'b'
        assert_eq!(session.sink().active, 2);

        for i in 0..5 {
            session.text_changed(format!("<a><b{}/></a>", i));
        }

        // only the most recent scan's styles remain live
        assert_eq!(session.sink().active, 2);
        assert_eq!(session.sink().created, 12);
        assert_eq!(session.sink().applies, 6);
        assert_eq!(session.sink().releases, 6);
    }

    #[test]
    fn rescans_only_xml_documents() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("*", "red")]);
        session.document_changed(Some(Document {
            kind: DocumentKind::Other,
            text: "<a/>".to_string(),
        }));

        assert_eq!(session.sink().applies, 0);
        assert_eq!(session.sink().releases, 0);
    }

    #[test]
    fn switching_away_is_a_noop_not_a_release() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("a", "red")]);
        session.document_changed(Some(xml("<a/>")));
        assert_eq!(session.sink().active, 1);

        // a non-XML document skips the scan entirely, leaving the previous
        // document's styles alone
        session.document_changed(Some(Document {
            kind: DocumentKind::Other,
            text: "fn main() {}".to_string(),
        }));
        assert_eq!(session.sink().active, 1);
    }

    #[test]
    fn no_document_open_is_a_noop() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("a", "red")]);
        session.reload();

        assert_eq!(session.sink().applies, 0);
    }

    #[test]
    fn rule_changes_trigger_a_rescan() {
        let mut session = Session::new(CountingSink::default());
        session.document_changed(Some(xml("<a><b/></a>")));
        assert_eq!(session.sink().active, 0);

        session.rules_changed(vec![rule("a", "red")]);
        assert_eq!(session.sink().active, 1);

        session.rules_changed(vec![]);
        assert_eq!(session.sink().active, 0);
    }

    #[test]
    fn manual_reload_rescans() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("a", "red")]);
        session.document_changed(Some(xml("<a/>")));
        assert_eq!(session.sink().applies, 1);

        session.reload();
        assert_eq!(session.sink().applies, 2);
        assert_eq!(session.sink().active, 1);
    }

    #[test]
    fn closing_releases_the_last_scan() {
        let mut session = Session::new(CountingSink::default());
        session.rules_changed(vec![rule("a", "red")]);
        session.document_changed(Some(xml("<a/>")));
        assert_eq!(session.sink().active, 1);

        session.close();
        assert_eq!(session.sink().active, 0);
    }
}
