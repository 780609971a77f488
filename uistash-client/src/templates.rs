use crate::api::{SnippetSource, CATEGORIES};

/// Starter snippet pre-filled into the editor when the author picks a
/// category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    pub title: &'static str,
    pub markup: &'static str,
    pub style: &'static str,
}

impl Template {
    pub fn for_category(category: &str) -> Option<Template> {
        let (title, markup, style) = match category {
            "button" => (
                "Button",
                r#"<button class="button">Button</button>"#,
                "\
.button {
  cursor: pointer;
  background-color: #4f46e5;
  color: white;
  border: none;
  padding: 10px 18px;
  border-radius: 6px;
  transition: background 0.3s;
}
.button:hover {
  background-color: #4338ca;
}",
            ),
            "toggle switch" => (
                "Toggle Switch",
                "\
<label class=\"switch\">
  <input type=\"checkbox\">
  <span class=\"slider\"></span>
</label>",
                "\
.switch {
  position: relative;
  display: inline-block;
  width: 3.5em;
  height: 2em;
}
.switch input {
  opacity: 0;
  width: 0;
  height: 0;
}
.slider {
  position: absolute;
  cursor: pointer;
  inset: 0;
  background-color: #ccc;
  border-radius: 2em;
  transition: 0.3s;
}
.slider::before {
  content: \"\";
  position: absolute;
  height: 1.4em;
  width: 1.4em;
  left: 0.3em;
  bottom: 0.3em;
  background-color: white;
  border-radius: 50%;
  transition: 0.3s;
}
.switch input:checked + .slider {
  background-color: #4f46e5;
}
.switch input:checked + .slider::before {
  transform: translateX(1.5em);
}",
            ),
            "checkbox" => (
                "Checkbox",
                r#"<label class="check"><input type="checkbox"><span>Accept</span></label>"#,
                "\
.check {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  cursor: pointer;
}
.check input {
  width: 1.2em;
  height: 1.2em;
  accent-color: #4f46e5;
}",
            ),
            "card" => (
                "Card",
                "\
<div class=\"card\">
  <h3>Card title</h3>
  <p>Some short description text.</p>
</div>",
                "\
.card {
  width: 220px;
  padding: 20px;
  border-radius: 12px;
  background: white;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
}
.card h3 {
  margin: 0 0 8px;
}
.card p {
  margin: 0;
  color: #6b7280;
}",
            ),
            "loader" => (
                "Loader",
                r#"<div class="loader"></div>"#,
                "\
.loader {
  width: 36px;
  height: 36px;
  border: 4px solid #e5e7eb;
  border-top-color: #4f46e5;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin {
  to {
    transform: rotate(360deg);
  }
}",
            ),
            "input" => (
                "Input",
                r#"<input class="field" type="text" placeholder="Type here...">"#,
                "\
.field {
  padding: 10px 14px;
  border: 1px solid #d1d5db;
  border-radius: 8px;
  outline: none;
}
.field:focus {
  border-color: #4f46e5;
  box-shadow: 0 0 0 3px rgba(79, 70, 229, 0.2);
}",
            ),
            "form" => (
                "Form",
                "\
<form class=\"form\">
  <input type=\"email\" placeholder=\"Email\">
  <button type=\"submit\">Sign up</button>
</form>",
                "\
.form {
  display: flex;
  gap: 8px;
}
.form input {
  padding: 10px 14px;
  border: 1px solid #d1d5db;
  border-radius: 8px;
}
.form button {
  padding: 10px 16px;
  border: none;
  border-radius: 8px;
  background: #4f46e5;
  color: white;
  cursor: pointer;
}",
            ),
            "pattern" => (
                "Pattern",
                r#"<div class="pattern"></div>"#,
                "\
.pattern {
  width: 160px;
  height: 160px;
  background-image: radial-gradient(#4f46e5 1.5px, transparent 1.5px);
  background-size: 16px 16px;
}",
            ),
            "radio buttons" => (
                "Radio Buttons",
                "\
<div class=\"radios\">
  <label><input type=\"radio\" name=\"r\" checked> One</label>
  <label><input type=\"radio\" name=\"r\"> Two</label>
</div>",
                "\
.radios {
  display: flex;
  flex-direction: column;
  gap: 6px;
}
.radios input {
  accent-color: #4f46e5;
}",
            ),
            "tooltips" => (
                "Tooltip",
                r#"<span class="tip" data-tip="I am a tooltip">Hover me</span>"#,
                "\
.tip {
  position: relative;
  cursor: default;
}
.tip::after {
  content: attr(data-tip);
  position: absolute;
  bottom: 130%;
  left: 50%;
  transform: translateX(-50%);
  padding: 6px 10px;
  border-radius: 6px;
  background: #111827;
  color: white;
  font-size: 12px;
  white-space: nowrap;
  opacity: 0;
  transition: opacity 0.2s;
  pointer-events: none;
}
.tip:hover::after {
  opacity: 1;
}",
            ),
            _ => return None,
        };
        Some(Template {
            title,
            markup,
            style,
        })
    }

    pub fn source(&self) -> SnippetSource {
        SnippetSource {
            markup: self.markup.to_string(),
            style: self.style.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_template() {
        for category in CATEGORIES {
            let t = Template::for_category(category)
                .unwrap_or_else(|| panic!("no template for {category}"));
            assert!(!t.markup.is_empty());
            assert!(!t.style.is_empty());
        }
    }

    #[test]
    fn unknown_category_has_none() {
        assert_eq!(Template::for_category("marquee"), None);
    }
}
