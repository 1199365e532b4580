use patternbook_core::{create_product, FurnitureStyle, Node, ProductKind};

#[test]
fn simple_factory_covers_the_product_set() {
    assert_eq!(
        create_product(ProductKind::Table).use_description(),
        "Using Table"
    );
    assert_eq!(
        create_product(ProductKind::Seat).use_description(),
        "Using Seat"
    );
}

#[test]
fn abstract_factory_produces_matched_families() {
    for style in [FurnitureStyle::Modern, FurnitureStyle::Art] {
        let table = style.table();
        let seat = style.seat();
        assert_eq!(table.style, style);
        assert_eq!(seat.style, style);
    }

    assert_eq!(
        FurnitureStyle::Modern.table().use_description(),
        "Use ModernTable"
    );
    assert_eq!(
        FurnitureStyle::Modern.seat().use_description(),
        "Use ModernSeat"
    );
    assert_eq!(FurnitureStyle::Art.table().use_description(), "Use ArtTable");
    assert_eq!(FurnitureStyle::Art.seat().use_description(), "Use ArtSeat");
}

#[test]
fn prototype_clone_preserves_shape_and_marks_names() {
    let tree = Node::folder(
        "Folder2",
        vec![
            Node::folder("Folder1", vec![Node::file("File1")]),
            Node::file("File2"),
            Node::file("File3"),
        ],
    );

    let clone = tree.deep_clone();
    assert_eq!(
        clone.render(),
        "Folder2_clone\n  Folder1_clone\n    File1_clone\n  File2_clone\n  File3_clone\n"
    );

    // Original hierarchy is untouched by cloning.
    assert_eq!(
        tree.render(),
        "Folder2\n  Folder1\n    File1\n  File2\n  File3\n"
    );
}

#[test]
fn prototype_clone_is_fully_detached() {
    let original = Node::folder("root", vec![Node::file("a")]);
    let mut clone = original.deep_clone();

    if let Node::Folder { children, .. } = &mut clone {
        children.push(Node::file("extra"));
    }

    assert_eq!(original.render(), "root\n  a\n");
    assert_eq!(clone.render(), "root_clone\n  a_clone\n  extra\n");
}
