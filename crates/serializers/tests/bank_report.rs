//! Integration tests: both markup visitors over the demo bank

use patterns_core::{sample_bank, Account, Bank, Person};
use patterns_serializers::{HtmlVisitor, SerializationFormat, XmlVisitor};

#[test]
fn test_default_run_output() {
    let bank = sample_bank();

    let lines: Vec<String> = SerializationFormat::defaults()
        .iter()
        .flat_map(|format| bank.accept(&*format.visitor(false)))
        .collect();

    assert_eq!(
        lines,
        vec![
            "<table><tr><td>Property<td><td>Value</td></tr><tr><td>Name<td><td>Иван Алексеев</td></tr><tr><td>Number<td><td>82184931</td></tr></table>",
            "<table><tr><td>Property<td><td>Value</td></tr><tr><td>Name<td><td>Microsoft</td></tr><tr><td>RegNumber<td><td>ewuir32141324</td></tr><tr><td>Number<td><td>3424131445</td></tr></table>",
            "<Person><Name>Иван Алексеев</Name><Number>82184931</Number><Person>",
            "<Company><Name>Microsoft</Name><RegNumber>ewuir32141324</RegNumber><Number>3424131445</Number><Company>",
        ]
    );
}

#[test]
fn test_html_person_field_order() {
    let bank = sample_bank();
    let html = bank.accept(&HtmlVisitor::new());

    let name_at = html[0].find("Иван Алексеев").unwrap();
    let number_at = html[0].find("82184931").unwrap();
    assert!(name_at < number_at);
}

#[test]
fn test_xml_company_field_order() {
    let bank = sample_bank();
    let xml = bank.accept(&XmlVisitor::new());

    let name_at = xml[1].find("Microsoft").unwrap();
    let reg_at = xml[1].find("ewuir32141324").unwrap();
    let number_at = xml[1].find("3424131445").unwrap();
    assert!(name_at < reg_at && reg_at < number_at);
}

#[test]
fn test_removed_account_is_not_visited() {
    let mut bank: Bank = sample_bank();
    let ivan: Account = Person::new("Иван Алексеев", "82184931").into();

    assert!(bank.remove(&ivan));

    let xml = bank.accept(&XmlVisitor::new());
    assert_eq!(xml.len(), 1);
    assert!(xml[0].starts_with("<Company>"));
}
