use super::entities::{ContactInfo, Education, Experience, PortfolioData, Project};

/// Placeholder content written into an empty store on first read.
pub fn default_portfolio() -> PortfolioData {
    PortfolioData {
        name: "Your Name".to_string(),
        title: "Full-Stack Developer".to_string(),
        photo_url: "https://placehold.co/400x400.png".to_string(),
        about_me: "I build reliable web applications end to end, from database schema to \
                   polished user interfaces. Edit this text from the admin page to tell \
                   visitors who you are and what you care about."
            .to_string(),
        summary: "Developer focused on clean architecture, pragmatic testing, and shipping \
                  features that users notice."
            .to_string(),
        skills: ["Rust", "TypeScript", "PostgreSQL", "Docker", "React"]
            .into_iter()
            .map(String::from)
            .collect(),
        projects: vec![
            Project {
                id: "1".to_string(),
                title: "Project One".to_string(),
                description: "A short description of the first project and the problem it \
                              solves."
                    .to_string(),
                image_url: "https://placehold.co/600x400.png".to_string(),
                link: "https://github.com/your-handle/project-one".to_string(),
                tags: vec!["Rust".to_string(), "Web".to_string()],
            },
            Project {
                id: "2".to_string(),
                title: "Project Two".to_string(),
                description: "A short description of the second project and what you \
                              learned building it."
                    .to_string(),
                image_url: "https://placehold.co/600x400.png".to_string(),
                link: "https://github.com/your-handle/project-two".to_string(),
                tags: vec!["TypeScript".to_string(), "React".to_string()],
            },
        ],
        experiences: vec![Experience {
            id: "1".to_string(),
            role: "Software Engineer".to_string(),
            company: "Example Corp".to_string(),
            period: "2021 - Present".to_string(),
            responsibilities: vec![
                "Designed and maintained backend services".to_string(),
                "Mentored junior developers".to_string(),
            ],
        }],
        educations: vec![Education {
            id: "1".to_string(),
            institution: "Example University".to_string(),
            degree: "B.Sc. Computer Science".to_string(),
            period: "2017 - 2021".to_string(),
        }],
        contact: Some(ContactInfo {
            email: "you@example.com".to_string(),
            phone: String::new(),
            linkedin_url: "https://www.linkedin.com/in/your-handle".to_string(),
            github_url: "https://github.com/your-handle".to_string(),
        }),
    }
}
