//! Fallback dataset used when a collection has never been stored or
//! cannot be parsed.

use crate::entity::{priority, status, Member, Project, Settings, Task};

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            name: "E-commerce Platform".to_string(),
            description: Some("Plataforma e-commerce".to_string()),
            category: Some("web".to_string()),
            priority: Some("high".to_string()),
            members: vec!["u1".to_string(), "u2".to_string()],
        },
        Project {
            id: "p2".to_string(),
            name: "Mobile App".to_string(),
            description: Some("App móvil".to_string()),
            category: Some("mobile".to_string()),
            priority: Some("medium".to_string()),
            members: vec!["u3".to_string()],
        },
    ]
}

pub fn members() -> Vec<Member> {
    vec![
        seed_member(
            "u1",
            "María García",
            "maria@example.com",
            "Frontend",
            "Senior",
            "1990-05-12",
            "123456789",
            "p1",
        ),
        seed_member(
            "u2",
            "Juan Pérez",
            "juan@example.com",
            "Backend",
            "Mid",
            "1988-02-20",
            "987654321",
            "p1",
        ),
        seed_member(
            "u3",
            "Ana López",
            "ana@example.com",
            "Designer",
            "Junior",
            "1995-11-01",
            "555444333",
            "p2",
        ),
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            description: "Implementar autenticación".to_string(),
            project_id: Some("p1".to_string()),
            status: Some(status::IN_PROGRESS.to_string()),
            priority: Some(priority::HIGH.to_string()),
            assignee: Some("u1".to_string()),
            due_date: Some("2025-11-15".to_string()),
        },
        Task {
            id: "t2".to_string(),
            description: "Diseñar pantalla de perfil".to_string(),
            project_id: Some("p2".to_string()),
            status: Some(status::PENDING.to_string()),
            priority: Some(priority::MEDIUM.to_string()),
            assignee: Some("u3".to_string()),
            due_date: Some("2025-11-20".to_string()),
        },
    ]
}

pub fn settings() -> Settings {
    Settings::default()
}

#[allow(clippy::too_many_arguments)]
fn seed_member(
    user_id: &str,
    name: &str,
    email: &str,
    role: &str,
    position: &str,
    birthdate: &str,
    phone: &str,
    project_id: &str,
) -> Member {
    Member {
        user_id: user_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Some(role.to_string()),
        position: Some(position.to_string()),
        birthdate: Some(birthdate.to_string()),
        phone: Some(phone.to_string()),
        project_id: Some(project_id.to_string()),
        is_active: Some(true),
    }
}
