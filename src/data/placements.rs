//! Seed records for jobs, companies, students, interviews and documents.

use chrono::{DateTime, Utc};

use crate::data::date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Open,
    Closed,
    OnHold,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::OnHold => "on hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company_id: u32,
    pub location: String,
    pub job_type: String,
    pub stipend: String,
    pub deadline: DateTime<Utc>,
    pub applicants: u32,
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub tier: String,
    pub open_roles: u32,
    pub campus_visits: u32,
    pub contact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStatus {
    Unplaced,
    Shortlisted,
    Placed,
}

impl PlacementStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlacementStatus::Unplaced => "unplaced",
            PlacementStatus::Shortlisted => "shortlisted",
            PlacementStatus::Placed => "placed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub id: u32,
    pub name: String,
    pub branch: String,
    pub cgpa: f32,
    pub skills: Vec<String>,
    pub placement_status: PlacementStatus,
    /// Resume score out of 100, as rated by the resume builder.
    pub resume_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewMode {
    OnCampus,
    Remote,
}

impl InterviewMode {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewMode::OnCampus => "on campus",
            InterviewMode::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSlot {
    pub id: u32,
    pub job_id: u32,
    pub student_id: u32,
    pub scheduled_at: DateTime<Utc>,
    pub round: String,
    pub mode: InterviewMode,
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: u32,
    pub owner: String,
    pub kind: String,
    pub uploaded_at: DateTime<Utc>,
    pub verified: bool,
}

pub fn seed_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Qubit Labs".to_string(),
            industry: "Software".to_string(),
            tier: "Tier 1".to_string(),
            open_roles: 4,
            campus_visits: 3,
            contact: "recruiting@qubitlabs.io".to_string(),
        },
        Company {
            id: 2,
            name: "Meridian Finance".to_string(),
            industry: "Fintech".to_string(),
            tier: "Tier 1".to_string(),
            open_roles: 2,
            campus_visits: 1,
            contact: "campus@meridianfin.com".to_string(),
        },
        Company {
            id: 3,
            name: "Helio Motors".to_string(),
            industry: "Automotive".to_string(),
            tier: "Tier 2".to_string(),
            open_roles: 3,
            campus_visits: 2,
            contact: "hr@heliomotors.in".to_string(),
        },
        Company {
            id: 4,
            name: "Northwind Analytics".to_string(),
            industry: "Data".to_string(),
            tier: "Tier 2".to_string(),
            open_roles: 1,
            campus_visits: 1,
            contact: "talent@northwind.ai".to_string(),
        },
    ]
}

pub fn seed_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Backend Engineer Intern".to_string(),
            company_id: 1,
            location: "Bengaluru".to_string(),
            job_type: "Internship".to_string(),
            stipend: "₹60,000/mo".to_string(),
            deadline: date(2026, 9, 15),
            applicants: 84,
            status: JobStatus::Open,
        },
        JobPosting {
            id: 2,
            title: "Graduate SDE".to_string(),
            company_id: 1,
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            stipend: "₹18 LPA".to_string(),
            deadline: date(2026, 9, 30),
            applicants: 212,
            status: JobStatus::Open,
        },
        JobPosting {
            id: 3,
            title: "Risk Analyst".to_string(),
            company_id: 2,
            location: "Mumbai".to_string(),
            job_type: "Full-time".to_string(),
            stipend: "₹14 LPA".to_string(),
            deadline: date(2026, 9, 5),
            applicants: 67,
            status: JobStatus::OnHold,
        },
        JobPosting {
            id: 4,
            title: "Embedded Systems Engineer".to_string(),
            company_id: 3,
            location: "Pune".to_string(),
            job_type: "Full-time".to_string(),
            stipend: "₹11 LPA".to_string(),
            deadline: date(2026, 8, 20),
            applicants: 45,
            status: JobStatus::Closed,
        },
        JobPosting {
            id: 5,
            title: "Data Engineering Intern".to_string(),
            company_id: 4,
            location: "Hyderabad".to_string(),
            job_type: "Internship".to_string(),
            stipend: "₹45,000/mo".to_string(),
            deadline: date(2026, 10, 1),
            applicants: 38,
            status: JobStatus::Open,
        },
    ]
}

pub fn seed_students() -> Vec<StudentProfile> {
    vec![
        StudentProfile {
            id: 1,
            name: "Aarav Sharma".to_string(),
            branch: "Computer Science".to_string(),
            cgpa: 8.9,
            skills: vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string()],
            placement_status: PlacementStatus::Shortlisted,
            resume_score: 86,
        },
        StudentProfile {
            id: 2,
            name: "Meera Iyer".to_string(),
            branch: "Electronics".to_string(),
            cgpa: 9.2,
            skills: vec!["VHDL".to_string(), "C".to_string(), "Python".to_string()],
            placement_status: PlacementStatus::Placed,
            resume_score: 91,
        },
        StudentProfile {
            id: 3,
            name: "John Mathew".to_string(),
            branch: "Mechanical".to_string(),
            cgpa: 7.4,
            skills: vec!["CAD".to_string(), "MATLAB".to_string()],
            placement_status: PlacementStatus::Unplaced,
            resume_score: 58,
        },
        StudentProfile {
            id: 4,
            name: "Divya Pillai".to_string(),
            branch: "Computer Science".to_string(),
            cgpa: 8.1,
            skills: vec!["Java".to_string(), "Kubernetes".to_string()],
            placement_status: PlacementStatus::Unplaced,
            resume_score: 73,
        },
    ]
}

pub fn seed_interviews() -> Vec<InterviewSlot> {
    vec![
        InterviewSlot {
            id: 1,
            job_id: 1,
            student_id: 1,
            scheduled_at: date(2026, 9, 2),
            round: "Technical I".to_string(),
            mode: InterviewMode::Remote,
            confirmed: true,
        },
        InterviewSlot {
            id: 2,
            job_id: 2,
            student_id: 4,
            scheduled_at: date(2026, 9, 4),
            round: "Screening".to_string(),
            mode: InterviewMode::OnCampus,
            confirmed: false,
        },
        InterviewSlot {
            id: 3,
            job_id: 3,
            student_id: 2,
            scheduled_at: date(2026, 9, 8),
            round: "HR".to_string(),
            mode: InterviewMode::Remote,
            confirmed: true,
        },
    ]
}

pub fn seed_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord {
            id: 1,
            owner: "Aarav Sharma".to_string(),
            kind: "Resume".to_string(),
            uploaded_at: date(2026, 8, 12),
            verified: true,
        },
        DocumentRecord {
            id: 2,
            owner: "John Mathew".to_string(),
            kind: "Transcript".to_string(),
            uploaded_at: date(2026, 8, 18),
            verified: false,
        },
        DocumentRecord {
            id: 3,
            owner: "Meera Iyer".to_string(),
            kind: "Offer Letter".to_string(),
            uploaded_at: date(2026, 8, 21),
            verified: true,
        },
        DocumentRecord {
            id: 4,
            owner: "Divya Pillai".to_string(),
            kind: "Resume".to_string(),
            uploaded_at: date(2026, 8, 25),
            verified: false,
        },
    ]
}
