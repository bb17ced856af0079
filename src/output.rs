use crate::model::Family;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Pretty,
    Compact,
}

pub fn to_json(families: &[Family], style: Style) -> serde_json::Result<String> {
    match style {
        Style::Pretty => serde_json::to_string_pretty(families),
        Style::Compact => serde_json::to_string(families),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;

    #[test]
    fn field_names() {
        let mut family = Family::new("Kapoors");
        family.members.push(Member {
            name: "Raj Kapoor".into(),
            profession: "Actor".into(),
            bio: String::new(),
            connections: vec!["Married to Krishna Kapoor".into()],
        });
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&[family], Style::Compact).unwrap()).unwrap();
        assert_eq!(json[0]["family_name"], "Kapoors");
        assert_eq!(json[0]["members"][0]["name"], "Raj Kapoor");
        assert_eq!(json[0]["members"][0]["profession"], "Actor");
        assert_eq!(json[0]["members"][0]["bio"], "");
        assert_eq!(json[0]["members"][0]["connections"][0], "Married to Krishna Kapoor");
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(to_json(&[], Style::Compact).unwrap(), "[]");
        assert_eq!(to_json(&[], Style::Pretty).unwrap(), "[]");
    }

    #[test]
    fn pretty_is_indented() {
        let out = to_json(&[Family::new("A")], Style::Pretty).unwrap();
        assert!(out.contains("\n  {"));
    }
}
