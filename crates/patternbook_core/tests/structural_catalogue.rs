use patternbook_core::{
    CheeseTopping, Component, Computer, EpsonPrinter, HpPrinter, Pizza, Platform, TomatoTopping,
    VeggieMania,
};

#[test]
fn bridge_swaps_printers_across_platforms() {
    let mut mac = Computer::new(Platform::Mac, Box::new(HpPrinter));
    assert_eq!(mac.print(), "Printing by a HP Printer");
    mac.set_printer(Box::new(EpsonPrinter));
    assert_eq!(mac.print(), "Printing by a EPSON Printer");

    let mut windows = Computer::new(Platform::Windows, Box::new(EpsonPrinter));
    assert_eq!(windows.print(), "Printing by a EPSON Printer");
    windows.set_printer(Box::new(HpPrinter));
    assert_eq!(windows.print(), "Printing by a HP Printer");
}

#[test]
fn composite_totals_match_the_reference_tree() {
    let inner = Component::container(
        0.1,
        vec![Component::product(13.9), Component::product(6.00)],
    );
    let outer = Component::container(0.2, vec![Component::product(9.9), inner]);

    assert_eq!(outer.total_value(), 30.1);
}

#[test]
fn composite_serializes_with_kind_tags() {
    let tree = Component::container(0.5, vec![Component::product(2.0)]);
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["kind"], "container");
    assert_eq!(json["value"], 0.5);
    assert_eq!(json["children"][0]["kind"], "product");

    let decoded: Component = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, tree);
}

#[test]
fn decorator_prices_are_additive() {
    assert_eq!(VeggieMania.price(), 15);
    assert_eq!(TomatoTopping::new(VeggieMania).price(), 22);
    assert_eq!(CheeseTopping::new(VeggieMania).price(), 25);
    assert_eq!(
        TomatoTopping::new(CheeseTopping::new(VeggieMania)).price(),
        32
    );
    assert_eq!(
        CheeseTopping::new(TomatoTopping::new(VeggieMania)).price(),
        32
    );
}
