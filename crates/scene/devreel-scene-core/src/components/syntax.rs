use log::warn;
use serde::{Deserialize, Serialize};

use crate::node::{NodeKind, NodeSpec};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Typescript,
    Javascript,
    Python,
    Bash,
    Yaml,
    Json,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Typescript => "typescript",
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Bash => "bash",
            Language::Yaml => "yaml",
            Language::Json => "json",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Monokai,
    Github,
    Dracula,
}

/// Code block node with language and font defaults filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxHighlighter {
    pub language: Language,
    pub code: String,
    pub font_size: f32,
    pub font_family: String,
    pub theme: Theme,
    pub position: [f32; 2],
    /// Anchor; `[-1, -1]` pins the block's top-left corner at `position`.
    pub offset: [f32; 2],
}

impl SyntaxHighlighter {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            font_size: 24.0,
            font_family: "JetBrains Mono, Fira Code, monospace".to_string(),
            theme: Theme::default(),
            position: [0.0, 0.0],
            offset: [-1.0, -1.0],
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn position(mut self, position: [f32; 2]) -> Self {
        self.position = position;
        self
    }

    pub fn build(&self, name: &str) -> NodeSpec {
        let theme = match self.theme {
            Theme::Monokai => "monokai",
            Theme::Github => "github",
            Theme::Dracula => "dracula",
        };
        NodeSpec::new(NodeKind::Code)
            .named(name)
            .prop("language", self.language.as_str())
            .prop("code", self.code.as_str())
            .prop("font_size", self.font_size)
            .prop("font_family", self.font_family.as_str())
            .prop("theme", theme)
            .prop("position", self.position)
            .prop("offset", self.offset)
    }
}

/// Bundled snippets as `(language, name, code)`.
pub const SNIPPETS: &[(Language, &str, &str)] = &[
    (
        Language::Typescript,
        "hello_world",
        r#"function greet(name: string): void {
  console.log(`Hello, ${name}!`);
}

greet("Motion Canvas");"#,
    ),
    (
        Language::Typescript,
        "async_function",
        r#"async function fetchData(url: string): Promise<Data> {
  try {
    const response = await fetch(url);
    const data = await response.json();
    return data;
  } catch (error) {
    console.error('Error fetching data:', error);
    throw error;
  }
}"#,
    ),
    (
        Language::Typescript,
        "interface",
        r#"interface User {
  id: number;
  name: string;
  email: string;
  roles: string[];
}

const user: User = {
  id: 1,
  name: "Willem",
  email: "willem@example.com",
  roles: ["admin", "developer"]
};"#,
    ),
    (
        Language::Bash,
        "kubectl",
        "# Get all pods in production namespace
kubectl get pods -n production

# Describe a specific pod
kubectl describe pod webapp-7d9b8c5f4-k8m2j

# View logs
kubectl logs -f webapp-7d9b8c5f4-k8m2j",
    ),
    (
        Language::Bash,
        "docker",
        "# Build Docker image
docker build -t myapp:latest .

# Run container
docker run -d -p 8080:80 myapp:latest

# View running containers
docker ps",
    ),
    (
        Language::Bash,
        "git",
        r#"# Initialize repository
git init

# Add files and commit
git add .
git commit -m "Initial commit"

# Push to remote
git push origin main"#,
    ),
    (
        Language::Python,
        "class",
        r#"class CloudDeployer:
    def __init__(self, region: str):
        self.region = region
        self.client = boto3.client('ec2', region_name=region)

    def deploy(self, instance_type: str):
        response = self.client.run_instances(
            ImageId='ami-12345678',
            InstanceType=instance_type,
            MinCount=1,
            MaxCount=1
        )
        return response['Instances'][0]['InstanceId']"#,
    ),
    (
        Language::Python,
        "data_processing",
        r#"import pandas as pd

def process_data(df: pd.DataFrame) -> pd.DataFrame:
    # Clean data
    df = df.dropna()

    # Transform
    df['processed'] = df['value'].apply(lambda x: x * 2)

    return df"#,
    ),
    (
        Language::Yaml,
        "kubernetes",
        "apiVersion: apps/v1
kind: Deployment
metadata:
  name: webapp
  namespace: production
spec:
  replicas: 3
  selector:
    matchLabels:
      app: webapp
  template:
    metadata:
      labels:
        app: webapp
    spec:
      containers:
      - name: webapp
        image: webapp:latest
        ports:
        - containerPort: 80",
    ),
    (
        Language::Yaml,
        "cicd",
        "name: CI/CD Pipeline
on:
  push:
    branches: [main]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - name: Build
        run: npm run build
      - name: Test
        run: npm test",
    ),
    (
        Language::Json,
        "config",
        r#"{
  "name": "cloud-infrastructure",
  "version": "1.0.0",
  "environments": {
    "production": {
      "region": "eu-west-1",
      "instances": 5,
      "autoscaling": true
    },
    "staging": {
      "region": "eu-west-1",
      "instances": 2,
      "autoscaling": false
    }
  }
}"#,
    ),
    (
        Language::Json,
        "api",
        r#"{
  "status": "success",
  "data": {
    "deployments": [
      {
        "id": "dep-123",
        "status": "running",
        "replicas": 3
      },
      {
        "id": "dep-456",
        "status": "pending",
        "replicas": 2
      }
    ]
  }
}"#,
    ),
];

/// Look up a bundled snippet.
pub fn snippet(language: Language, name: &str) -> Option<&'static str> {
    SNIPPETS
        .iter()
        .find(|(l, n, _)| *l == language && *n == name)
        .map(|(_, _, code)| *code)
}

/// Like [`snippet`], but logs a warning and yields an empty string when the
/// snippet does not exist.
pub fn get_code_snippet(language: Language, name: &str) -> &'static str {
    match snippet(language, name) {
        Some(code) => code,
        None => {
            warn!(
                "snippet {name:?} not found for language {:?}",
                language.as_str()
            );
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn lookup_known_and_missing() {
        let code = snippet(Language::Bash, "docker").unwrap();
        assert!(code.starts_with("# Build Docker image"));
        assert_eq!(code.lines().count(), 8);
        assert!(snippet(Language::Javascript, "docker").is_none());
        assert_eq!(get_code_snippet(Language::Yaml, "helm"), "");
    }

    #[test]
    fn snippet_names_unique_per_language() {
        for (i, (l, n, _)) in SNIPPETS.iter().enumerate() {
            assert!(
                !SNIPPETS[i + 1..].iter().any(|(l2, n2, _)| l2 == l && n2 == n),
                "duplicate snippet {n}"
            );
        }
    }

    #[test]
    fn highlighter_defaults() {
        let spec = SyntaxHighlighter::new(Language::Python, "pass").build("code");
        assert_eq!(spec.kind, NodeKind::Code);
        assert_eq!(spec.props.get("font_size"), Some(&Value::Scalar(24.0)));
        assert_eq!(spec.props.get("offset"), Some(&Value::Vec2([-1.0, -1.0])));
        assert_eq!(spec.props.get("language"), Some(&Value::Text("python".into())));
    }
}
