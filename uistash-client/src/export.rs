use crate::api::SnippetSource;

/// Targets the export popup can rewrite a snippet into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Lit,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::React,
        Framework::Vue,
        Framework::Svelte,
        Framework::Lit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
            Framework::Lit => "Lit",
        }
    }

    pub fn generate(&self, source: &SnippetSource) -> String {
        let markup = &source.markup;
        let style = &source.style;
        match self {
            Framework::React => {
                let jsx = markup
                    .replace("class=", "className=")
                    .replace("for=", "htmlFor=");
                format!(
                    "export default function Component() {{\n  return (\n    <>\n      <style>{{`{style}`}}</style>\n      {jsx}\n    </>\n  );\n}}"
                )
            }
            Framework::Vue => {
                format!("<template>\n  {markup}\n</template>\n\n<style scoped>\n{style}\n</style>")
            }
            Framework::Svelte => {
                format!("<style>\n{style}\n</style>\n\n{markup}")
            }
            Framework::Lit => {
                format!(
                    "import {{ LitElement, html, css }} from 'lit';\nclass MyComponent extends LitElement {{\n  static styles = css`{style}`;\n  render() {{\n    return html`{markup}`;\n  }}\n}}\ncustomElements.define('my-component', MyComponent);"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SnippetSource {
        SnippetSource {
            markup: r#"<label for="x" class="switch">on</label>"#.into(),
            style: ".switch { width: 3em }".into(),
        }
    }

    #[test]
    fn react_rewrites_html_attributes() {
        let code = Framework::React.generate(&source());
        assert!(code.contains(r#"className="switch""#));
        assert!(code.contains(r#"htmlFor="x""#));
        assert!(!code.contains("class="));
        assert!(code.contains("export default function Component()"));
    }

    #[test]
    fn vue_scopes_the_style_block() {
        let code = Framework::Vue.generate(&source());
        assert!(code.starts_with("<template>"));
        assert!(code.contains("<style scoped>"));
        assert!(code.contains(".switch { width: 3em }"));
    }

    #[test]
    fn svelte_keeps_markup_verbatim() {
        let code = Framework::Svelte.generate(&source());
        assert!(code.contains(r#"<label for="x" class="switch">on</label>"#));
    }

    #[test]
    fn lit_defines_a_custom_element() {
        let code = Framework::Lit.generate(&source());
        assert!(code.contains("extends LitElement"));
        assert!(code.contains("customElements.define('my-component', MyComponent);"));
    }
}
