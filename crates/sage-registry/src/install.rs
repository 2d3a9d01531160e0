/// Install-instruction generator: formats the package-manager command,
/// the import statement and the usage example for one component. Pure and
/// deterministic; the caller handles the unknown-component case.
use crate::model::ComponentMetadata;

/// The published package components are imported from.
pub const PACKAGE_NAME: &str = "@thesage/ui";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Parse a package-manager name, defaulting to npm for absent or
    /// unrecognized input.
    pub fn parse(input: Option<&str>) -> PackageManager {
        match input.map(str::trim).map(str::to_lowercase).as_deref() {
            Some("pnpm") => PackageManager::Pnpm,
            Some("yarn") => PackageManager::Yarn,
            Some("bun") => PackageManager::Bun,
            _ => PackageManager::Npm,
        }
    }

    fn command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm add",
            PackageManager::Yarn => "yarn add",
            PackageManager::Bun => "bun add",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub install_command: String,
    pub import_statement: String,
    pub example: Option<String>,
}

/// Build the install plan for a component. The install command lists the
/// library itself followed by each dependency exactly once, first
/// occurrence order preserved.
pub fn install_plan(component: &ComponentMetadata, manager: PackageManager) -> InstallPlan {
    let mut packages: Vec<&str> = vec![PACKAGE_NAME];
    for dep in &component.dependencies {
        if !packages.contains(&dep.as_str()) {
            packages.push(dep);
        }
    }

    InstallPlan {
        install_command: format!("{} {}", manager.command(), packages.join(" ")),
        import_statement: format!(
            "import {{ {} }} from \"{}\"",
            export_name(&component.name),
            PACKAGE_NAME
        ),
        example: component.example.clone(),
    }
}

/// PascalCase export name: "Date Picker" -> "DatePicker".
fn export_name(name: &str) -> String {
    name.split(|c| matches!(c, ' ' | '-' | '_'))
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn export_names_are_pascal_case() {
        assert_eq!(export_name("Button"), "Button");
        assert_eq!(export_name("Date Picker"), "DatePicker");
        assert_eq!(export_name("icon-button"), "IconButton");
    }

    #[test]
    fn dialog_install_command_lists_each_dependency_once() {
        let registry = Registry::from_embedded().unwrap();
        let dialog = registry.get("Dialog").expect("dialog exists");
        assert!(!dialog.dependencies.is_empty());

        let plan = install_plan(dialog, PackageManager::Npm);
        for dep in &dialog.dependencies {
            let occurrences = plan.install_command.matches(dep.as_str()).count();
            assert_eq!(occurrences, 1, "dependency {dep} should appear exactly once");
        }
        assert!(plan.install_command.starts_with("npm install @thesage/ui"));
    }

    #[test]
    fn repeated_dependencies_are_deduplicated() {
        let component = ComponentMetadata {
            name: "Widget".to_string(),
            category: crate::model::Category::Actions,
            description: "test".to_string(),
            keywords: vec![],
            use_cases: vec![],
            dependencies: vec![
                "left-pad".to_string(),
                "left-pad".to_string(),
                "date-fns".to_string(),
            ],
            props: vec![],
            example: None,
        };
        let plan = install_plan(&component, PackageManager::Pnpm);
        assert_eq!(
            plan.install_command,
            "pnpm add @thesage/ui left-pad date-fns"
        );
    }

    #[test]
    fn same_input_yields_same_output() {
        let registry = Registry::from_embedded().unwrap();
        let button = registry.get("Button").unwrap();
        let a = install_plan(button, PackageManager::Yarn);
        let b = install_plan(button, PackageManager::Yarn);
        assert_eq!(a.install_command, b.install_command);
        assert_eq!(a.import_statement, b.import_statement);
    }

    #[test]
    fn unknown_manager_falls_back_to_npm() {
        assert_eq!(PackageManager::parse(Some("deno")), PackageManager::Npm);
        assert_eq!(PackageManager::parse(None), PackageManager::Npm);
        assert_eq!(PackageManager::parse(Some("PNPM")), PackageManager::Pnpm);
    }
}
