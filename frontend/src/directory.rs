//! Static course and lab listings.

use opslearn_shared::filter::{DirectoryEntry, Level};

pub static COURSES: &[DirectoryEntry] = &[
    DirectoryEntry {
        title: "Linux Fundamentals for Operators",
        description: "Processes, permissions, systemd and the shell habits every on-call engineer relies on.",
        level: Level::Beginner,
        duration: "6 hours",
        tags: &["linux", "shell", "systemd"],
        link: "/articles?search=linux",
    },
    DirectoryEntry {
        title: "Docker from Zero to Production",
        description: "Build small images, wire up compose stacks and ship containers with confidence.",
        level: Level::Beginner,
        duration: "8 hours",
        tags: &["docker", "containers"],
        link: "/articles?search=docker",
    },
    DirectoryEntry {
        title: "Kubernetes Workloads",
        description: "Deployments, services, probes and rollouts on a real cluster.",
        level: Level::Intermediate,
        duration: "10 hours",
        tags: &["kubernetes", "containers", "helm"],
        link: "/articles?search=kubernetes",
    },
    DirectoryEntry {
        title: "CI/CD Pipelines with GitHub Actions",
        description: "Test, build and release automatically with reusable workflows.",
        level: Level::Intermediate,
        duration: "5 hours",
        tags: &["ci", "github-actions", "automation"],
        link: "/articles?search=pipeline",
    },
    DirectoryEntry {
        title: "Infrastructure as Code with Terraform",
        description: "Modules, remote state and safe plans for cloud infrastructure.",
        level: Level::Intermediate,
        duration: "7 hours",
        tags: &["terraform", "iac", "cloud"],
        link: "/articles?search=terraform",
    },
    DirectoryEntry {
        title: "Observability in Depth",
        description: "Metrics, logs and traces with Prometheus, Loki and OpenTelemetry.",
        level: Level::Advanced,
        duration: "9 hours",
        tags: &["monitoring", "prometheus", "tracing"],
        link: "/articles?search=monitoring",
    },
];

pub static LABS: &[DirectoryEntry] = &[
    DirectoryEntry {
        title: "Debug a Crashing Container",
        description: "Read exit codes, inspect logs and fix a container stuck in a restart loop.",
        level: Level::Beginner,
        duration: "45 min",
        tags: &["docker", "troubleshooting"],
        link: "/articles?search=docker",
    },
    DirectoryEntry {
        title: "Zero-Downtime Rolling Update",
        description: "Roll a new version through a Kubernetes deployment without dropping requests.",
        level: Level::Intermediate,
        duration: "1 hour",
        tags: &["kubernetes", "deployments"],
        link: "/articles?search=kubernetes",
    },
    DirectoryEntry {
        title: "Write Your First Terraform Module",
        description: "Wrap a network and a VM into a reusable module with inputs and outputs.",
        level: Level::Intermediate,
        duration: "1.5 hours",
        tags: &["terraform", "iac"],
        link: "/articles?search=terraform",
    },
    DirectoryEntry {
        title: "Alert on the Right Signals",
        description: "Turn noisy dashboards into a handful of actionable Prometheus alerts.",
        level: Level::Advanced,
        duration: "2 hours",
        tags: &["monitoring", "prometheus", "alerting"],
        link: "/articles?search=monitoring",
    },
];
