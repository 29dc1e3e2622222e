use nxgen_core::descriptor::{EntryKind, ProjectDescriptor, ProjectType};
use nxgen_core::{synthesize, TargetBuilder};

fn descriptor(entries: &[EntryKind]) -> ProjectDescriptor {
    ProjectDescriptor::new("/ws", "/ws/packages/foo", "foo", ProjectType::Lib)
        .with_entries(entries.iter().copied())
}

#[test]
fn test_build_command_references_workspace_root() {
    let manifest = synthesize(&descriptor(&[EntryKind::Build]));

    let build = manifest.target("build").unwrap();
    let command = &build.options.commands[0];
    assert!(command.contains("ROLLUP_CONFIG_TYPE=lib"));
    assert!(command.contains("../../rollup.config.mjs"));
    assert_eq!(
        command,
        "cross-env ROLLUP_CONFIG_TYPE=lib rollup -c ../../rollup.config.mjs"
    );
    assert_eq!(manifest.targets.len(), 1);
}

#[test]
fn test_empty_entries() {
    let manifest = synthesize(&descriptor(&[]));

    assert!(manifest.targets.is_empty());
    assert!(manifest.tags.is_empty());
    assert_eq!(manifest.name, "foo");
    assert_eq!(manifest.project_kind, "library");
    assert_eq!(
        manifest.schema_ref,
        "../../node_modules/nx/schemas/project-schema.json"
    );
}

#[test]
fn test_source_root_default() {
    let d = ProjectDescriptor::new("/ws", "/ws/packages/cli", "cli", ProjectType::Cli);
    let manifest = synthesize(&d);
    assert_eq!(manifest.source_root, "/ws/packages/cli/src");
}

#[test]
fn test_custom_source_and_target_dirs() {
    let d = descriptor(&[EntryKind::Clean])
        .with_source_dir("source")
        .with_target_dir("dist");
    let manifest = synthesize(&d);

    assert_eq!(manifest.source_root, "/ws/packages/foo/source");
    let clean = manifest.target("clean").unwrap();
    assert_eq!(clean.options.commands, vec!["rimraf dist".to_string()]);
    assert!(clean.depends_on.is_none());
    assert!(clean.configurations.is_none());
}

#[test]
fn test_build_depends_on_clean_without_clean_entry() {
    let manifest = synthesize(&descriptor(&[EntryKind::Build]));

    let build = manifest.target("build").unwrap();
    assert_eq!(
        build.depends_on,
        Some(vec!["clean".to_string(), "^build".to_string()])
    );
    assert!(manifest.target("clean").is_none());
}

#[test]
fn test_build_production_overlay() {
    let manifest = synthesize(&descriptor(&[EntryKind::Build]));

    let production = manifest
        .target("build")
        .and_then(|t| t.configuration("production"))
        .unwrap();
    assert_eq!(production.source_map, Some(false));
    assert_eq!(
        production.env.as_ref().and_then(|env| env.get("NODE_ENV")),
        Some(&"production".to_string())
    );
    assert!(production.commands.is_none());
}

#[test]
fn test_watch_target() {
    let d = ProjectDescriptor::new("/ws", "/ws/packages/ext", "ext", ProjectType::Vsc)
        .with_entries([EntryKind::Watch]);
    let manifest = synthesize(&d);

    let watch = manifest.target("watch").unwrap();
    assert_eq!(
        watch.options.commands,
        vec!["cross-env ROLLUP_CONFIG_TYPE=vsc rollup -c ../../rollup.config.mjs -w".to_string()]
    );
    assert_eq!(watch.options.parallel, Some(false));
    assert_eq!(watch.options.source_map, Some(true));
    assert!(watch.depends_on.is_none());
    assert!(watch.configurations.is_none());
}

#[test]
fn test_test_overlays_replace_commands() {
    let manifest = synthesize(&descriptor(&[EntryKind::Test]));

    let test = manifest.target("test").unwrap();
    let base = "node --experimental-vm-modules ../../node_modules/.bin/jest \
                --config ../../jest.config.mjs --rootDir .";
    assert_eq!(test.options.commands, vec![base.to_string()]);
    assert_eq!(test.options.parallel, None);
    assert_eq!(test.options.source_map, None);

    let coverage = test.configuration("coverage").unwrap();
    assert_eq!(
        coverage.commands,
        Some(vec![format!("{} --coverage", base)])
    );
    let update = test.configuration("update").unwrap();
    assert_eq!(update.commands, Some(vec![format!("{} -u", base)]));
}

#[test]
fn test_targets_in_canonical_order() {
    let manifest = synthesize(&descriptor(&[
        EntryKind::Test,
        EntryKind::Watch,
        EntryKind::Clean,
        EntryKind::Build,
    ]));

    let names: Vec<&str> = manifest.targets.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["clean", "build", "watch", "test"]);
    for target in manifest.targets.values() {
        assert_eq!(target.executor, "nx:run-commands");
        assert_eq!(target.options.cwd, "/ws/packages/foo");
        assert_eq!(target.options.commands.len(), 1);
    }
}

#[test]
fn test_relative_project_dir() {
    let d = ProjectDescriptor::new("/ws", "packages/foo", "foo", ProjectType::Lib)
        .with_entries([EntryKind::Build]);
    let builder = TargetBuilder::new(&d);
    assert_eq!(builder.to_root(), "../..");

    let manifest = builder.build();
    assert_eq!(manifest.source_root, "packages/foo/src");
    assert_eq!(manifest.target("build").unwrap().options.cwd, "packages/foo");
}

#[test]
fn test_project_at_workspace_root() {
    let d = ProjectDescriptor::new("/ws", "/ws", "root", ProjectType::Lib)
        .with_entries([EntryKind::Build]);
    let manifest = synthesize(&d);

    assert_eq!(
        manifest.schema_ref,
        "./node_modules/nx/schemas/project-schema.json"
    );
    assert!(manifest.target("build").unwrap().options.commands[0]
        .ends_with("-c ./rollup.config.mjs"));
}

#[test]
fn test_tags_pass_through() {
    let d = descriptor(&[]).with_tags(["scope:shared", "type:lib", "scope:shared"]);
    let manifest = synthesize(&d);
    assert_eq!(manifest.tags, vec!["scope:shared", "type:lib", "scope:shared"]);
}

#[test]
fn test_manifest_json_shape() {
    let manifest = synthesize(&descriptor(&[EntryKind::Build, EntryKind::Test]));
    let value = serde_json::to_value(&manifest).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["$schema", "name", "sourceRoot", "projectType", "tags", "targets"]
    );
    assert_eq!(
        value["targets"]["build"]["dependsOn"],
        serde_json::json!(["clean", "^build"])
    );
    assert_eq!(
        value["targets"]["build"]["configurations"]["production"],
        serde_json::json!({ "sourceMap": false, "env": { "NODE_ENV": "production" } })
    );
    assert_eq!(value["targets"]["build"]["options"]["sourceMap"], true);
    assert!(value["targets"]["test"]["options"].get("parallel").is_none());
    assert!(value["targets"]["test"].get("dependsOn").is_none());
}
