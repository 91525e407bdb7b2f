use crate::components::{label, CodeEditor, Language, SyntaxHighlighter, MONO};
use crate::config::ProjectConfig;
use crate::error::SceneResult;
use crate::scene::SceneDesc;
use crate::script::{all, append_to, select, tween, wait, Step};
use crate::value::Value;

/// Code typed into the editor as (text, typing seconds, pause afterwards).
pub const TYPING: &[(&str, f64, f64)] = &[
    ("// Kubernetes deployment automation", 1.2, 0.3),
    ("\ninterface DeploymentConfig {", 0.8, 0.0),
    ("\n  namespace: string;", 0.8, 0.0),
    ("\n  replicas: number;", 0.8, 0.0),
    ("\n  image: string;", 0.8, 0.0),
    ("\n}", 0.5, 0.5),
    ("\n\nclass KubernetesDeployer {", 0.8, 0.0),
    ("\n  async deploy(config: DeploymentConfig) {", 1.0, 0.0),
    ("\n    console.log(`Deploying to ${config.namespace}...`);", 1.2, 0.3),
    ("\n    ", 0.3, 0.0),
    ("\n    // Validate configuration", 1.0, 0.0),
    ("\n    if (!this.validateConfig(config)) {", 1.0, 0.0),
    ("\n      throw new Error('Invalid configuration');", 1.2, 0.0),
    ("\n    }", 0.5, 0.3),
    ("\n    ", 0.3, 0.0),
    ("\n    // Apply Kubernetes manifest", 1.0, 0.0),
    ("\n    const manifest = this.generateManifest(config);", 1.5, 0.0),
    ("\n    await this.kubectl.apply(manifest);", 1.2, 0.3),
    ("\n    ", 0.3, 0.0),
    ("\n    return { success: true, namespace: config.namespace };", 1.5, 0.0),
    ("\n  }", 0.5, 0.0),
    ("\n}", 0.5, 0.0),
];

/// Full text of the code block once typing is done.
pub fn typed_code() -> String {
    TYPING.iter().map(|(text, _, _)| *text).collect()
}

pub fn scene(_config: &ProjectConfig) -> SceneResult<SceneDesc> {
    let code = SyntaxHighlighter::new(Language::Typescript, "")
        .font_size(28.0)
        .font_family(MONO)
        .position([-650.0, -320.0])
        .build("code");
    let editor = CodeEditor::default()
        .size(1400.0, 800.0)
        .position([0.0, 50.0])
        .scale(0.9)
        .opacity(0.0)
        .build("editor", [code]);
    let title = label("title", "TypeScript Code Animation", 48.0, Value::rgb(0xffffff))
        .prop("font_weight", 700.0)
        .prop("position", [0.0, -450.0])
        .prop("opacity", 0.0);

    let mut script: Vec<Step> = vec![
        tween("title", "opacity", 1.0, 0.8),
        wait(0.5),
        all(vec![
            tween("editor", "scale", 1.0, 0.8),
            tween("editor", "opacity", 1.0, 0.8),
        ]),
        wait(0.5),
    ];
    for &(text, seconds, pause) in TYPING {
        script.push(append_to("code", "code", text, seconds));
        if pause > 0.0 {
            script.push(wait(pause));
        }
    }
    script.extend([
        wait(1.0),
        select("code", 8, Some(11), 1.0),
        wait(1.5),
        select("code", 15, Some(16), 1.0),
        wait(1.5),
        select("code", 0, None, 1.0),
        wait(2.0),
        all(vec![
            tween("editor", "opacity", 0.0, 1.0),
            tween("title", "opacity", 0.0, 1.0),
        ]),
    ]);

    Ok(SceneDesc::new("code-demo")
        .node(title)
        .node(editor)
        .steps(script))
}
