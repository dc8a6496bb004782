//! Integration tests for the nested Markdown builders.
//!
//! Run with: cargo test --test builder_test

use mdfluent::{
    BuilderOptions, DocumentBuilder, Error, Fragment, LineEnding, TableBuilder, TableData,
    Violation,
};

#[test]
fn test_text_appears_in_append_order() {
    let parts = ["alpha", "beta", "gamma"];
    let mut doc = DocumentBuilder::new();
    for part in parts {
        doc.add_text(part).add_text(" ");
    }

    let md = doc.render();
    let positions: Vec<usize> = parts.iter().map(|p| md.find(p).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_inline_fragments() {
    let mut doc = DocumentBuilder::new();
    doc.add_header(3, "Title")
        .add_bold("x")
        .add_italic("y")
        .new_line()
        .add_link("Go", "https://go.dev");

    assert_eq!(doc.render(), "### Title\n**x***y*\n[Go](https://go.dev)");
}

#[test]
fn test_nested_link_preserves_formatting() {
    let url = "https://example.com/a";
    let mut doc = DocumentBuilder::new();
    doc.add_link_with(url, |label| {
        label.add_bold("X");
    });
    assert_eq!(doc.render(), format!("[**X**]({})", url));

    let mut empty = DocumentBuilder::new();
    empty.add_link_with(url, |_| {});
    assert_eq!(empty.render(), format!("[]({})", url));
}

#[test]
fn test_table_exact_output() {
    let mut table = TableBuilder::new(&["A", "B"]);
    table.add_row(|row| {
        row.add_cell(|c| {
            c.add_text("1");
        })
        .add_cell(|c| {
            c.add_text("2");
        });
    });

    assert_eq!(table.render(), "|A|B|\n|---|---|\n|1|2|\n");
    assert_eq!(table.render(), table.to_string());
}

#[test]
fn test_nested_and_flat_tables_are_identical() {
    let data = TableData::new(["Lang", "Site", "Note"])
        .with_row(["Go", "[Go](https://go.dev)", "*simple*"])
        .with_row(["Rust", "[**Rust**](https://rust-lang.org)", ""]);

    let flat = data.to_markdown(BuilderOptions::default()).unwrap();

    let mut nested = TableBuilder::new(&["Lang", "Site", "Note"]);
    nested
        .add_row(|row| {
            row.add_cell(|c| {
                c.add_text("Go");
            })
            .add_cell(|c| {
                c.add_link("Go", "https://go.dev");
            })
            .add_cell(|c| {
                c.add_italic("simple");
            });
        })
        .add_row(|row| {
            row.add_cell(|c| {
                c.add_text("Rust");
            })
            .add_cell(|c| {
                c.add_link_with("https://rust-lang.org", |label| {
                    label.add_bold("Rust");
                });
            })
            .add_cell(|_| {});
        });

    assert_eq!(flat, nested.render());

    let mut doc = DocumentBuilder::new();
    doc.add_table(&data.headers, &data.rows);
    assert_eq!(doc.render(), flat);
}

#[test]
fn test_deep_nesting_in_document() {
    let mut doc = DocumentBuilder::new();
    doc.add_header(1, "Index").add_table_with(&["Entry"], |table| {
        table.add_row(|row| {
            row.add_cell(|cell| {
                cell.add_text("see ").add_link_with("#a", |label| {
                    label.add_text("part ").add_link_with("#b", |inner| {
                        inner.add_bold("b");
                    });
                });
            });
        });
    });
    doc.add_text("end");

    assert_eq!(
        doc.render(),
        "# Index\n|Entry|\n|---|\n|see [part [**b**](#b)](#a)|\nend"
    );
}

#[test]
fn test_strict_violations_bubble_to_document() {
    let options = BuilderOptions::new().with_strict(true);
    let mut doc = DocumentBuilder::with_options(options);
    doc.add_table_with(&["A", "B"], |table| {
        table.add_row(|row| {
            row.add_cell(|c| {
                c.add_text("lonely");
            });
        });
    });

    assert_eq!(
        doc.violations(),
        &[Violation::ColumnCount {
            row: 1,
            expected: 2,
            found: 1
        }]
    );
    match doc.finish() {
        Err(Error::Validation(Violation::ColumnCount { found, .. })) => assert_eq!(found, 1),
        other => panic!("expected column count violation, got {:?}", other),
    }
}

#[test]
fn test_children_inherit_line_ending() {
    let options = BuilderOptions::new().with_line_ending(LineEnding::CrLf);
    let mut doc = DocumentBuilder::with_options(options);
    doc.add_table_with(&["A"], |table| {
        table.add_row(|row| {
            row.add_cell(|cell| {
                cell.add_text("1");
            });
        });
    });

    assert_eq!(doc.render(), "|A|\r\n|---|\r\n|1|\r\n");
}
