use tracing::info;

use jobvars_model::{Expander, Variables};

use crate::cli::Command;

/// Execute `command` and return the lines to print.
pub fn run(command: &Command, vars: &Variables, expander: &Expander) -> Vec<String> {
    match command {
        Command::Render { visible } => select(vars, *visible).render_all(),
        Command::Expand { visible, templates } => {
            let expanded = select(vars, *visible).expand_with(expander);
            info!(
                variables = expanded.len(),
                templates = templates.len(),
                "expansion finished"
            );

            let mut lines = expanded.render_all();
            lines.extend(templates.iter().map(|t| expanded.expand_value(t)));
            lines
        }
        Command::Get { key } => vec![vars.get(key).to_string()],
    }
}

fn select(vars: &Variables, visible: bool) -> Variables {
    if visible { vars.visible() } else { vars.clone() }
}

#[cfg(test)]
mod tests {
    use jobvars_model::{DanglingDollar, Expander, ExpansionRules, Variable, Variables};

    use super::run;
    use crate::cli::Command;

    fn vars() -> Variables {
        Variables::from(vec![
            Variable::new("HOST", "example.org").with_public(true),
            Variable::new("TOKEN", "s3cr3t"),
            Variable::new("URL", "https://$HOST/?t=$TOKEN").with_public(true),
            Variable::new("HOST", "override.org").with_public(true),
        ])
    }

    #[test]
    fn render_all_or_visible() {
        let expander = Expander::default();

        let all = run(&Command::Render { visible: false }, &vars(), &expander);
        assert_eq!(all.len(), 4);
        assert_eq!(all[1], "TOKEN=s3cr3t");

        let visible = run(&Command::Render { visible: true }, &vars(), &expander);
        assert_eq!(
            visible,
            ["HOST=example.org", "URL=https://$HOST/?t=$TOKEN", "HOST=override.org"]
        );
    }

    #[test]
    fn expand_prints_variables_then_templates() {
        let cmd = Command::Expand {
            visible: false,
            templates: vec!["curl $URL".into()],
        };
        let lines = run(&cmd, &vars(), &Expander::default());

        assert_eq!(
            lines,
            [
                "HOST=example.org",
                "TOKEN=s3cr3t",
                "URL=https://override.org/?t=s3cr3t",
                "HOST=override.org",
                "curl https://override.org/?t=s3cr3t",
            ]
        );
    }

    #[test]
    fn visible_expansion_cannot_see_private_values() {
        let cmd = Command::Expand {
            visible: true,
            templates: vec!["$TOKEN".into()],
        };
        let lines = run(&cmd, &vars(), &Expander::default());

        assert_eq!(lines[1], "URL=https://override.org/?t=");
        assert_eq!(lines.last().unwrap(), "");
    }

    #[test]
    fn expand_honours_rules() {
        let rules = ExpansionRules {
            dangling_dollar: DanglingDollar::Keep,
            ..Default::default()
        };
        let vars = Variables::from(vec![Variable::new("P", "$/x")]);
        let cmd = Command::Expand {
            visible: false,
            templates: vec![],
        };

        assert_eq!(run(&cmd, &vars, &rules.compile().unwrap()), ["P=$/x"]);
    }

    #[test]
    fn get_returns_first_match() {
        let cmd = Command::Get { key: "HOST".into() };
        assert_eq!(run(&cmd, &vars(), &Expander::default()), ["example.org"]);

        let cmd = Command::Get { key: "MISSING".into() };
        assert_eq!(run(&cmd, &vars(), &Expander::default()), [""]);
    }
}
