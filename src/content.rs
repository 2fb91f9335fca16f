//! Static page content: testimonials, projects, skills and headline stats.
//!
//! Records are defined once and never mutated. Testimonials are addressed by
//! position, projects by their `id`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub github_url: &'static str,
    pub live_demo_url: Option<&'static str>,
}

/// An outbound action rendered inside the project modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub href: &'static str,
    pub label: String,
}

impl Project {
    pub fn source_link(&self) -> ProjectLink {
        ProjectLink {
            href: self.github_url,
            label: format!("View {} source code on GitHub (opens in new tab)", self.title),
        }
    }

    /// `None` when the project has no live deployment; the action is hidden then.
    pub fn live_demo_link(&self) -> Option<ProjectLink> {
        self.live_demo_url.map(|href| ProjectLink {
            href,
            label: format!("View live demo of {} (opens in new tab)", self.title),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u64,
    pub label: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with Dawood has been an excellent experience. He has a real talent for simplifying complex DevSecOps processes into clear, actionable steps that everyone can follow. His expertise in cloud and DevOps has often been my go-to resource, and what sets him apart is his patience and willingness to share knowledge. Dawood not only solves problems but also helps elevate the entire team's skills.",
        author: "Umair Amjad",
        title: "Position: Software Engineer at TechCreator",
        date: "Date: November 26, 2024",
    },
    Testimonial {
        quote: "Dawood's approach to building and maintaining reliable systems impressed us from the very beginning. He implemented a robust monitoring and alerting setup that gave us full visibility into our applications, resulting in improved performance and stability. Beyond his technical depth, he communicates clearly and works well with others, which makes collaboration easy. Dawood is a true professional we'd be more than happy to work with again.",
        author: "Zaheer Abbas",
        title: "Position: Web Developer (Self-Employed)",
        date: "Date: February 02, 2025",
    },
    Testimonial {
        quote: "Dawood consistently delivers beyond expectations and has been a key asset to our projects. He automated our deployment pipelines, reducing release times from hours to just minutes, which had a huge impact on productivity. What stands out is his calmness under pressure and ability to collaborate seamlessly across teams. Dawood combines technical excellence with professionalism, making him a truly reliable and standout DevOps engineer.",
        author: "Hamdan Ahmad",
        title: "Position: Project Manager at TechCreator",
        date: "Date: December 30, 2024",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 0,
        title: "3-Tier App on K8s (Minikube)",
        description: "A fully containerized real-time chat app using Node.js, React, and MongoDB, deployed with Kubernetes. It showcases my skills in cloud-native deployment, DevOps workflows, Docker, Secrets, ConfigMaps, and persistent storage for scalable infrastructure.",
        skills: &["Nginx", "Docker", "DockerHub", "Kubernetes", "MiniKube"],
        github_url: "https://github.com/idavidkhan/3-tier-app-on-k8s-minikube",
        live_demo_url: None,
    },
    Project {
        id: 1,
        title: "3 Tier App K8s(Kind) with Prometheus & Grafana",
        description: "A hands-on Kubernetes project where I deployed a complete three-tier application on a Kind cluster, configured using Docker and kubectl. The setup includes full monitoring with Prometheus and Grafana installed via Helm. This project demonstrates practical DevOps skills in container orchestration, observability, and real-world infrastructure deployment.",
        skills: &["Kubernetes", "Helm", "Kind", "Prometheus", "Grafana"],
        github_url: "https://github.com/idavidkhan/3-tier-App-K8s-KIND-with-Prometheus-and-Grafana/",
        live_demo_url: None,
    },
    Project {
        id: 2,
        title: "Ansible Web Server Configuration Management",
        description: "Developed a set of idempotent Ansible playbooks to automate the setup and configuration of Apache and Nginx web servers across multiple Linux virtual machines (provisioned with Vagrant). This ensures configuration consistency and speeds up environment setup.",
        skills: &["Ansible", "Linux", "Vagrant", "Apache", "Nginx", "YAML"],
        github_url: "https://github.com/idavidkhan/ansible-config",
        live_demo_url: None,
    },
];

pub const MAJOR_SKILLS: &[&str] = &[
    "Linux",
    "Docker",
    "Kubernetes",
    "AWS",
    "Terraform",
    "Ansible",
    "GitHub Actions",
    "Jenkins",
];

pub const MINOR_SKILLS: &[&str] = &[
    "Helm",
    "Prometheus",
    "Grafana",
    "Nginx",
    "Apache",
    "Vagrant",
    "Bash",
    "Python",
    "YAML",
    "Git",
];

pub const STATS: &[Stat] = &[
    Stat {
        target: 15,
        label: "Projects shipped",
    },
    Stat {
        target: 40,
        label: "Pipelines automated",
    },
    Stat {
        target: 1200,
        label: "Commits this year",
    },
];

pub fn testimonial(index: usize) -> Option<&'static Testimonial> {
    TESTIMONIALS.get(index)
}

pub fn find_project(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|project| project.id == id)
}

pub fn project(id: u32) -> Option<&'static Project> {
    find_project(PROJECTS, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_PROJECT: Project = Project {
        id: 7,
        title: "Status Page",
        description: "Uptime dashboard.",
        skills: &["Go", "Docker"],
        github_url: "https://github.com/example/status",
        live_demo_url: Some("https://status.example.com"),
    };

    #[test]
    fn testimonial_lookup_is_positional() {
        assert_eq!(testimonial(1).map(|t| t.author), Some("Zaheer Abbas"));
        assert!(testimonial(TESTIMONIALS.len()).is_none());
    }

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn unknown_project_id_is_not_found() {
        assert!(project(99).is_none());
        assert_eq!(project(2).map(|p| p.title), Some(PROJECTS[2].title));
    }

    #[test]
    fn find_project_ignores_ordering() {
        let shuffled = [PROJECTS[2], DEMO_PROJECT, PROJECTS[0]];
        assert_eq!(find_project(&shuffled, 7), Some(&DEMO_PROJECT));
        assert_eq!(find_project(&shuffled, 0).map(|p| p.id), Some(0));
    }

    #[test]
    fn missing_live_demo_hides_action() {
        assert!(PROJECTS[0].live_demo_link().is_none());
    }

    #[test]
    fn live_demo_link_matches_record() {
        let link = DEMO_PROJECT.live_demo_link().expect("demo url present");
        assert_eq!(link.href, "https://status.example.com");
        assert_eq!(link.label, "View live demo of Status Page (opens in new tab)");
    }

    #[test]
    fn source_link_always_points_at_repository() {
        let link = PROJECTS[1].source_link();
        assert_eq!(link.href, PROJECTS[1].github_url);
        assert!(link.label.starts_with("View 3 Tier App"));
    }

    #[test]
    fn project_skills_keep_their_order() {
        assert_eq!(PROJECTS[0].skills.first(), Some(&"Nginx"));
        assert_eq!(PROJECTS[0].skills.last(), Some(&"MiniKube"));
    }
}
