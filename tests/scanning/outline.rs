#[cfg(test)]
mod verify {
    use prodel::language::{NodeKind, OutlineNode, Position, Range};
    use prodel::scanning::{outline, CancelToken};

    fn scan(content: &str) -> Vec<OutlineNode> {
        outline(content, &CancelToken::new()).expect("scan should complete")
    }

    fn range(start_line: u32, start_character: u32, end_line: u32, end_character: u32) -> Range {
        Range::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    #[test]
    fn empty_documents_have_empty_outlines() {
        assert_eq!(scan(""), vec![]);
        assert_eq!(scan("x = 1\ny = 2\n"), vec![]);
    }

    #[test]
    fn single_procedure() {
        let symbols = scan("int proc Foo\nbegin counter = 1\nend");
        assert_eq!(symbols.len(), 1);

        let foo = &symbols[0];
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.kind, NodeKind::Procedure);
        assert_eq!(foo.detail, None);
        assert_eq!(foo.range, range(0, 0, 2, 3));
        assert_eq!(foo.selection_range, range(0, 0, 0, 12));
        assert!(foo
            .children
            .is_empty());
    }

    #[test]
    fn one_line_procedures_terminate_on_their_header() {
        let symbols = scan("proc Tiny begin end\nproc Next begin end");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].range, range(0, 0, 0, 19));
        assert_eq!(symbols[1].range, range(1, 0, 1, 19));
    }

    #[test]
    fn forward_declaration_on_the_last_line() {
        let symbols = scan("proc Foo forward");
        assert_eq!(symbols, vec![{
            let mut node = OutlineNode::new("Foo", NodeKind::Procedure, range(0, 0, 0, 16));
            node.detail = Some("forward".to_string());
            node
        }]);
    }

    #[test]
    fn external_declaration_before_more_procedures() {
        let symbols = scan("proc First external\nproc Second\nbegin\nend");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].detail, Some("external".to_string()));
        assert_eq!(symbols[0].range, range(0, 0, 0, 19));
        assert_eq!(symbols[1].name, "Second");
        assert_eq!(symbols[1].range, range(1, 0, 3, 3));
    }

    #[test]
    fn forward_marker_in_the_body_before_any_block() {
        let symbols = scan("proc Foo\n    forward\nproc Bar\nbegin\nend");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].detail, Some("forward".to_string()));
        assert_eq!(symbols[0].range, range(0, 0, 1, 11));
        assert_eq!(symbols[1].name, "Bar");
    }

    #[test]
    fn forward_after_a_block_opens_is_an_identifier() {
        let symbols = scan("proc Foo\nbegin\nexternal = 1\nend");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].detail, None);
        assert_eq!(symbols[0].range, range(0, 0, 3, 3));
    }

    #[test]
    fn subprocedure_and_synthesized_main_body() {
        let symbols = scan("proc Foo\nbegin\nsubproc Bar begin end\ntotal = total + 1\nend");
        assert_eq!(symbols.len(), 1);

        let foo = &symbols[0];
        assert_eq!(foo.range, range(0, 0, 4, 3));
        assert_eq!(
            foo.children
                .len(),
            2
        );

        let bar = &foo.children[0];
        assert_eq!(bar.name, "Bar");
        assert_eq!(bar.kind, NodeKind::SubProcedure);
        assert_eq!(bar.range, range(2, 0, 2, 21));

        let main = &foo.children[1];
        assert_eq!(main.name, "main: Foo");
        assert_eq!(main.kind, NodeKind::MainBody);
        assert_eq!(main.range, range(3, 0, 4, 3));
        assert_eq!(main.selection_range, range(3, 0, 3, 17));
    }

    #[test]
    fn no_main_body_without_trailing_lines() {
        let symbols = scan("proc Foo\nbegin\nsubproc Bar begin end\nend");
        let foo = &symbols[0];
        assert_eq!(
            foo.children
                .len(),
            1
        );
        assert_eq!(foo.children[0].name, "Bar");
        assert_eq!(foo.range, range(0, 0, 3, 3));
    }

    #[test]
    fn multiline_subprocedure_bodies() {
        let symbols = scan("proc Outer\nbegin\nsubproc Inner\nbegin\nwork = 1\nend\ncleanup = 2\nend");
        let outer = &symbols[0];
        assert_eq!(outer.range, range(0, 0, 7, 3));
        assert_eq!(
            outer
                .children
                .len(),
            2
        );
        assert_eq!(outer.children[0].name, "Inner");
        assert_eq!(outer.children[0].range, range(2, 0, 5, 3));
        assert_eq!(outer.children[1].name, "main: Outer");
        assert_eq!(outer.children[1].range, range(6, 0, 7, 3));
    }

    #[test]
    fn nested_blocks_extend_the_procedure_range() {
        let symbols = scan("proc Outer\nbegin\nbegin\nend\nbegin\nend\nend");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].range, range(0, 0, 6, 3));
        assert!(symbols[0]
            .children
            .is_empty());
    }

    #[test]
    fn unterminated_body_clamps_to_the_last_line() {
        let symbols = scan("proc Foo\nbegin\nwork = 1");
        assert_eq!(symbols[0].range, range(0, 0, 2, 8));
    }

    #[test]
    fn commented_out_declarations_are_ignored() {
        assert_eq!(scan("-- proc ShouldNotMatch"), vec![]);
    }

    #[test]
    fn commented_out_keywords_do_not_move_the_depth() {
        let symbols = scan("proc Foo\nbegin\n-- end\n/* end */\nend");
        assert_eq!(symbols[0].range, range(0, 0, 4, 3));
    }

    #[test]
    fn rescanning_is_idempotent() {
        let content = "proc Foo\nbegin\nsubproc Bar begin end\ntotal = 1\nend\n?section Ignored";
        assert_eq!(scan(content), scan(content));
    }

    #[test]
    fn procedures_suppress_the_directive_outline() {
        let symbols = scan("?section Alpha\nproc Foo\nbegin\nend");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, NodeKind::Procedure);
    }

    #[test]
    fn section_and_page_fallback() {
        let symbols = scan("?section Alpha\n?page \"Intro\"");
        assert_eq!(symbols.len(), 1);

        let alpha = &symbols[0];
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.kind, NodeKind::Section);
        assert_eq!(alpha.range, range(0, 0, 1, 13));
        assert_eq!(alpha.selection_range, range(0, 0, 0, 14));
        assert_eq!(
            alpha
                .children
                .len(),
            1
        );

        let intro = &alpha.children[0];
        assert_eq!(intro.name, "Intro");
        assert_eq!(intro.kind, NodeKind::Page);
        assert_eq!(intro.range, range(1, 0, 1, 13));
    }

    #[test]
    fn sections_close_at_the_next_section() {
        let symbols = scan("?section Alpha\ntext\n?section Beta\n?page \"B1\"\ntail");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, "Alpha");
        assert_eq!(symbols[0].range, range(0, 0, 1, 4));
        assert_eq!(symbols[1].name, "Beta");
        assert_eq!(symbols[1].range, range(2, 0, 4, 4));
        assert_eq!(
            symbols[1]
                .children
                .len(),
            1
        );
    }

    #[test]
    fn page_without_a_section_is_top_level() {
        let symbols = scan("?page \"Floating\"\n?section Alpha");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].kind, NodeKind::Page);
        assert_eq!(symbols[0].name, "Floating");
        assert_eq!(symbols[1].kind, NodeKind::Section);
    }

    #[test]
    fn page_without_a_heading_is_not_a_symbol() {
        assert_eq!(scan("?page"), vec![]);
        assert_eq!(scan("?page  "), vec![]);
    }

    #[test]
    fn cancelled_scans_return_no_result() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(outline("proc Foo\nbegin\nend", &cancel), None);
    }
}
