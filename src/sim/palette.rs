//! Word vocabulary and category-keyed colors

use rand::Rng;

use crate::consts::{COLOR_GRAY, COLOR_GRAY_LIGHT, COLOR_RED, COLOR_RED_DARK, COLOR_WHITE};

/// Color family for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCategory {
    /// Languages, frameworks, OOP keywords
    Accent,
    /// Infrastructure, tooling, databases
    Infrastructure,
    Neutral,
}

/// Exact (case-insensitive) token membership per category
const CATEGORY_TABLE: &[(WordCategory, &[&str])] = &[
    (
        WordCategory::Accent,
        &[
            "java",
            "javascript",
            "react",
            "angular",
            "spring",
            "class",
            "interface",
            "function",
            "functional",
            "method",
            "async",
            "await",
            "promise",
        ],
    ),
    (
        WordCategory::Infrastructure,
        &[
            "docker",
            "kubectl",
            "kubernetes",
            "git",
            "gitlab",
            "github",
            "npm",
            "yarn",
            "mysql",
            "postgresql",
            "mongodb",
            "aws",
            "azure",
            "gcp",
        ],
    ),
];

impl WordCategory {
    pub fn of(text: &str) -> Self {
        CATEGORY_TABLE
            .iter()
            .find(|(_, words)| words.iter().any(|w| w.eq_ignore_ascii_case(text)))
            .map(|(category, _)| *category)
            .unwrap_or(WordCategory::Neutral)
    }

    /// The two shades a word of this category may take
    pub fn shades(&self) -> [&'static str; 2] {
        match self {
            WordCategory::Accent => [COLOR_RED, COLOR_RED_DARK],
            WordCategory::Infrastructure => [COLOR_GRAY, COLOR_GRAY_LIGHT],
            WordCategory::Neutral => [COLOR_WHITE, COLOR_GRAY],
        }
    }
}

/// Pick a display color for `text`, random between its category's shades
pub fn color_for<R: Rng>(text: &str, rng: &mut R) -> &'static str {
    let shades = WordCategory::of(text).shades();
    shades[rng.random_range(0..shades.len())]
}

/// Uniformly random token from [`PROGRAMMING_TOKENS`]
pub fn random_token<R: Rng>(rng: &mut R) -> &'static str {
    PROGRAMMING_TOKENS[rng.random_range(0..PROGRAMMING_TOKENS.len())]
}

/// Falling word vocabulary. Tokens listed under more than one group
/// (docker, kubectl, helm, ...) appear more often.
pub const PROGRAMMING_TOKENS: &[&str] = &[
    // Java keywords
    "class", "interface", "abstract", "final", "static", "public", "private", "protected",
    "extends", "implements", "super", "this", "new", "instanceof", "synchronized", "volatile",
    "transient", "native", "strictfp", "package", "import", "throws", "throw", "try", "catch",
    "finally", "if", "else", "switch", "case", "default", "for", "while", "do", "break",
    "continue", "return", "void", "int", "long", "double", "float", "char", "byte", "short",
    "boolean", "String", "Object", "null", "true", "false",
    // Languages & frameworks
    "Java", "JavaScript", "TypeScript", "Python", "Kotlin", "Scala", "Groovy", "C++", "C#",
    "Go", "Rust", "Swift", "Dart", "PHP", "Ruby", "Perl", "R", "MATLAB",
    "React", "Angular", "Vue", "Svelte", "Next", "Nuxt", "Express", "Spring", "Hibernate",
    "JPA", "JUnit", "Mockito", "Maven", "Gradle", "Ant",
    // Terminal
    "ls", "cd", "pwd", "mkdir", "rm", "cp", "mv", "cat", "grep", "find", "chmod", "chown",
    "ps", "kill", "top", "htop", "df", "du", "tar", "zip", "unzip", "git", "npm", "yarn",
    "docker", "kubectl", "helm", "terraform", "ansible", "curl", "wget", "ssh", "scp",
    "sudo", "su", "apt", "yum", "brew", "pip", "conda",
    // Kubernetes & DevOps
    "Kubernetes", "k8s", "pod", "deployment", "service", "ingress", "configmap", "secret",
    "namespace", "node", "cluster", "helm", "kubectl", "minikube", "docker", "container",
    "image", "registry", "CI", "CD", "Jenkins", "GitLab", "GitHub", "Actions", "pipeline",
    "terraform", "ansible", "prometheus", "grafana", "ELK", "kibana",
    // Databases
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Cassandra", "Elasticsearch", "Oracle",
    "DB2", "SQLite", "Neo4j", "DynamoDB", "CosmosDB", "HBase", "CouchDB",
    // Cloud
    "AWS", "EC2", "S3", "Lambda", "DynamoDB", "RDS", "VPC", "CloudFormation", "CloudWatch",
    "Azure", "GCP", "Google", "Cloud", "Firebase", "Heroku", "Netlify", "Vercel",
    // Web
    "HTML", "CSS", "SASS", "SCSS", "LESS", "Bootstrap", "Tailwind", "Webpack", "Vite", "REST",
    "GraphQL", "gRPC", "WebSocket", "HTTP", "HTTPS", "TCP", "IP", "DNS",
    // General
    "function", "method", "variable", "constant", "array", "list", "map", "set", "queue",
    "stack", "tree", "graph", "algorithm", "data structure", "OOP", "functional", "async",
    "await", "promise", "callback", "closure", "recursion", "iteration", "loop",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_category_lookup_is_exact() {
        assert_eq!(WordCategory::of("Java"), WordCategory::Accent);
        assert_eq!(WordCategory::of("JavaScript"), WordCategory::Accent);
        assert_eq!(WordCategory::of("async"), WordCategory::Accent);
        assert_eq!(WordCategory::of("functional"), WordCategory::Accent);
        assert_eq!(WordCategory::of("GitHub"), WordCategory::Infrastructure);
        assert_eq!(WordCategory::of("kubectl"), WordCategory::Infrastructure);
        assert_eq!(WordCategory::of("PostgreSQL"), WordCategory::Infrastructure);
        // Substrings do not match
        assert_eq!(WordCategory::of("TypeScript"), WordCategory::Neutral);
        assert_eq!(WordCategory::of("instanceof"), WordCategory::Neutral);
        assert_eq!(WordCategory::of("grep"), WordCategory::Neutral);
    }

    #[test]
    fn test_color_stays_in_category() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let accent = color_for("React", &mut rng);
            assert!(accent == COLOR_RED || accent == COLOR_RED_DARK);

            let infra = color_for("docker", &mut rng);
            assert!(infra == COLOR_GRAY || infra == COLOR_GRAY_LIGHT);

            let neutral = color_for("loop", &mut rng);
            assert!(neutral == COLOR_WHITE || neutral == COLOR_GRAY);
        }
    }

    #[test]
    fn test_repeated_tokens_are_weighted() {
        let count = |token: &str| PROGRAMMING_TOKENS.iter().filter(|t| **t == token).count();
        for token in ["docker", "kubectl", "helm", "terraform", "ansible", "DynamoDB"] {
            assert_eq!(count(token), 2, "{token}");
        }
        assert_eq!(count("Rust"), 1);
    }

    #[test]
    fn test_every_table_entry_is_in_vocabulary() {
        for (_, words) in CATEGORY_TABLE {
            for word in *words {
                assert!(
                    PROGRAMMING_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(word)),
                    "{word} missing from vocabulary"
                );
            }
        }
    }
}
