//! Account visitors - HTML, XML, JSON
//!
//! Each visitor turns one account into a single-line text block. The HTML and
//! XML layouts are the fixed legacy layouts and are reproduced as-is,
//! including their unclosed cell and root tags.

use crate::format::SerializationFormat;
use patterns_core::{AccountVisitor, Company, Person};
use std::borrow::Cow;

/// Visitor that also names the format it produces
pub trait FormatVisitor: AccountVisitor {
    fn format(&self) -> SerializationFormat;
}

/// Field value as embedded in markup
fn markup_field(value: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        html_escape::encode_text(value)
    } else {
        Cow::Borrowed(value)
    }
}

// ============================================================================
// HTML Visitor
// ============================================================================

const HTML_HEADER: &str = "<table><tr><td>Property<td><td>Value</td></tr>";

/// Two-column property/value table
#[derive(Debug, Clone, Default)]
pub struct HtmlVisitor {
    escape: bool,
}

impl HtmlVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `&`, `<` and `>` in field values
    pub fn escaped(mut self) -> Self {
        self.escape = true;
        self
    }

    fn row(&self, property: &str, value: &str) -> String {
        format!(
            "<tr><td>{}<td><td>{}</td></tr>",
            property,
            markup_field(value, self.escape)
        )
    }

    fn table(&self, rows: &[(&str, &str)]) -> String {
        let mut output = String::from(HTML_HEADER);
        for (property, value) in rows {
            output.push_str(&self.row(property, value));
        }
        output.push_str("</table>");
        output
    }
}

impl AccountVisitor for HtmlVisitor {
    fn visit_person(&self, person: &Person) -> String {
        self.table(&[("Name", person.name.as_str()), ("Number", person.number.as_str())])
    }

    fn visit_company(&self, company: &Company) -> String {
        self.table(&[
            ("Name", company.name.as_str()),
            ("RegNumber", company.reg_number.as_str()),
            ("Number", company.number.as_str()),
        ])
    }
}

impl FormatVisitor for HtmlVisitor {
    fn format(&self) -> SerializationFormat {
        SerializationFormat::Html
    }
}

// ============================================================================
// XML Visitor
// ============================================================================

/// Fixed-tag markup, one root element per account
#[derive(Debug, Clone, Default)]
pub struct XmlVisitor {
    escape: bool,
}

impl XmlVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `&`, `<` and `>` in field values
    pub fn escaped(mut self) -> Self {
        self.escape = true;
        self
    }

    fn element(&self, root: &str, fields: &[(&str, &str)]) -> String {
        let mut output = format!("<{}>", root);
        for (tag, value) in fields {
            output.push_str(&format!(
                "<{tag}>{}</{tag}>",
                markup_field(value, self.escape)
            ));
        }
        // Legacy layout repeats the opening tag instead of closing it
        output.push_str(&format!("<{}>", root));
        output
    }
}

impl AccountVisitor for XmlVisitor {
    fn visit_person(&self, person: &Person) -> String {
        self.element("Person", &[("Name", person.name.as_str()), ("Number", person.number.as_str())])
    }

    fn visit_company(&self, company: &Company) -> String {
        self.element(
            "Company",
            &[
                ("Name", company.name.as_str()),
                ("RegNumber", company.reg_number.as_str()),
                ("Number", company.number.as_str()),
            ],
        )
    }
}

impl FormatVisitor for XmlVisitor {
    fn format(&self) -> SerializationFormat {
        SerializationFormat::Xml
    }
}

// ============================================================================
// JSON Visitor
// ============================================================================

/// One JSON object per account, tagged with its type
#[derive(Debug, Clone, Default)]
pub struct JsonVisitor {
    pretty: bool,
}

impl JsonVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render(&self, value: serde_json::Value) -> String {
        if self.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_default()
        } else {
            serde_json::to_string(&value).unwrap_or_default()
        }
    }
}

impl AccountVisitor for JsonVisitor {
    fn visit_person(&self, person: &Person) -> String {
        self.render(serde_json::json!({
            "type": "person",
            "name": person.name,
            "number": person.number,
        }))
    }

    fn visit_company(&self, company: &Company) -> String {
        self.render(serde_json::json!({
            "type": "company",
            "name": company.name,
            "reg_number": company.reg_number,
            "number": company.number,
        }))
    }
}

impl FormatVisitor for JsonVisitor {
    fn format(&self) -> SerializationFormat {
        SerializationFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns_core::{sample_bank, Bank};

    fn ivan() -> Person {
        Person::new("Иван Алексеев", "82184931")
    }

    fn microsoft() -> Company {
        Company::new("Microsoft", "ewuir32141324", "3424131445")
    }

    #[test]
    fn test_html_person() {
        let output = ivan().accept(&HtmlVisitor::new());
        assert_eq!(
            output,
            "<table><tr><td>Property<td><td>Value</td></tr>\
             <tr><td>Name<td><td>Иван Алексеев</td></tr>\
             <tr><td>Number<td><td>82184931</td></tr></table>"
        );
    }

    #[test]
    fn test_html_company() {
        let output = microsoft().accept(&HtmlVisitor::new());
        assert!(output.starts_with(HTML_HEADER));
        assert!(output.contains("<tr><td>RegNumber<td><td>ewuir32141324</td></tr>"));
        assert!(output.ends_with("<tr><td>Number<td><td>3424131445</td></tr></table>"));
    }

    #[test]
    fn test_xml_person() {
        let output = ivan().accept(&XmlVisitor::new());
        assert_eq!(
            output,
            "<Person><Name>Иван Алексеев</Name><Number>82184931</Number><Person>"
        );
    }

    #[test]
    fn test_xml_company_field_order() {
        let output = microsoft().accept(&XmlVisitor::new());
        assert_eq!(
            output,
            "<Company><Name>Microsoft</Name><RegNumber>ewuir32141324</RegNumber>\
             <Number>3424131445</Number><Company>"
        );
    }

    #[test]
    fn test_values_verbatim_by_default() {
        let person = Person::new("<b>Tom & Jerry</b>", "1");
        assert!(person
            .accept(&HtmlVisitor::new())
            .contains("<b>Tom & Jerry</b>"));
        assert!(person
            .accept(&XmlVisitor::new())
            .contains("<Name><b>Tom & Jerry</b></Name>"));
    }

    #[test]
    fn test_escaped_values() {
        let person = Person::new("<b>Tom & Jerry</b>", "1");

        let html = person.accept(&HtmlVisitor::new().escaped());
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(!html.contains("<b>"));

        let xml = person.accept(&XmlVisitor::new().escaped());
        assert!(xml.contains("<Name>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</Name>"));
    }

    #[test]
    fn test_json_company() {
        let output = microsoft().accept(&JsonVisitor::new());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["type"], "company");
        assert_eq!(value["reg_number"], "ewuir32141324");
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_json_pretty() {
        let output = ivan().accept(&JsonVisitor::new().pretty());
        assert!(output.contains("\n"));
        assert!(output.contains("\"name\": \"Иван Алексеев\""));
    }

    #[test]
    fn test_bank_order_per_visitor() {
        let bank = sample_bank();

        let html = HtmlVisitor::new();
        let xml = XmlVisitor::new();
        let json = JsonVisitor::new();
        let visitors: [&dyn FormatVisitor; 3] = [&html, &xml, &json];

        for visitor in visitors {
            let blocks = bank.accept(visitor);
            assert_eq!(blocks.len(), 2);
            assert!(blocks[0].contains("Иван Алексеев"));
            assert!(blocks[1].contains("Microsoft"));
        }
    }

    #[test]
    fn test_visiting_twice_is_identical() {
        let bank: Bank = sample_bank();
        let visitor = HtmlVisitor::new();
        assert_eq!(bank.accept(&visitor), bank.accept(&visitor));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(HtmlVisitor::new().format(), SerializationFormat::Html);
        assert_eq!(XmlVisitor::new().format(), SerializationFormat::Xml);
        assert_eq!(JsonVisitor::new().format(), SerializationFormat::Json);
    }
}
