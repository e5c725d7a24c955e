//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `collabnotes_core` linkage.
//! - Walk one create/rename/resolve cycle with deterministic output.

use collabnotes_core::{Category, MemoryNamespace, NoteDocument};

fn main() {
    println!("collabnotes_core version={}", collabnotes_core::core_version());

    let mut ns = MemoryNamespace::new();
    let cube = ns.insert("Cube");

    let mut document = NoteDocument::new();
    document.session_mut().stage_title("Check topology");
    document.session_mut().stage_description("Quads only before export");
    document.session_mut().stage_category(Category::High);

    match document.create_note(Some(cube), &ns) {
        Ok(outcome) => println!("create outcome={outcome:?}"),
        Err(err) => {
            eprintln!("create failed: {err}");
            std::process::exit(1);
        }
    }

    ns.rename(cube, "Cube.001");
    let pass = document.on_document_updated(&ns);
    println!(
        "resolver repaired={} unchanged={} dangling={}",
        pass.repaired, pass.unchanged, pass.dangling
    );

    for (index, note) in document.filtered_view() {
        println!(
            "note[{index}] object={} title={} category={}",
            note.object_reference, note.title, note.category
        );
    }
}
