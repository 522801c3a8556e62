//! Seed the database with sample employee data.
//!
//! Run this after the database is reachable; it applies migrations, clears
//! any existing rows, and inserts the sample directory.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::mysql::MySqlPoolOptions;
use staffdir_core::{config::Config, migration};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// (name, email, department, designation, date_of_joining)
const SAMPLE_EMPLOYEES: &[(&str, &str, &str, &str, (i32, u32, u32))] = &[
    ("Rahul Sharma", "rahul.sharma@company.com", "Engineering", "Software Engineer", (2023, 1, 15)),
    ("Priya Patel", "priya.patel@company.com", "Engineering", "Senior Developer", (2022, 6, 1)),
    ("Amit Kumar", "amit.kumar@company.com", "Marketing", "Marketing Manager", (2021, 3, 10)),
    ("Sneha Gupta", "sneha.gupta@company.com", "HR", "HR Executive", (2023, 4, 20)),
    ("Vikram Singh", "vikram.singh@company.com", "Engineering", "Tech Lead", (2020, 8, 5)),
    ("Neha Verma", "neha.verma@company.com", "Finance", "Financial Analyst", (2022, 11, 12)),
    ("Rajesh Mehta", "rajesh.mehta@company.com", "Sales", "Sales Executive", (2023, 2, 28)),
    ("Anita Desai", "anita.desai@company.com", "Engineering", "QA Engineer", (2021, 9, 15)),
    ("Karan Malhotra", "karan.malhotra@company.com", "Marketing", "Content Strategist", (2022, 7, 22)),
    ("Pooja Reddy", "pooja.reddy@company.com", "HR", "HR Manager", (2019, 5, 1)),
    ("Suresh Iyer", "suresh.iyer@company.com", "Engineering", "DevOps Engineer", (2022, 1, 10)),
    ("Deepa Nair", "deepa.nair@company.com", "Finance", "Accountant", (2023, 6, 5)),
    ("Arun Krishnan", "arun.krishnan@company.com", "Engineering", "Frontend Developer", (2023, 3, 18)),
    ("Meera Joshi", "meera.joshi@company.com", "Sales", "Sales Manager", (2020, 12, 1)),
    ("Rohit Agarwal", "rohit.agarwal@company.com", "Engineering", "Backend Developer", (2022, 9, 8)),
    ("Kavita Chopra", "kavita.chopra@company.com", "Marketing", "Digital Marketing Specialist", (2023, 5, 12)),
    ("Sanjay Bhatt", "sanjay.bhatt@company.com", "Finance", "Finance Manager", (2021, 7, 8)),
    ("Ritu Singh", "ritu.singh@company.com", "Engineering", "Full Stack Developer", (2022, 10, 20)),
    ("Manish Rao", "manish.rao@company.com", "Sales", "Business Development Manager", (2021, 2, 15)),
    ("Divya Menon", "divya.menon@company.com", "HR", "Talent Acquisition Specialist", (2023, 8, 1)),
    ("Nikhil Kapoor", "nikhil.kapoor@company.com", "Engineering", "Data Engineer", (2022, 4, 10)),
    ("Swati Kulkarni", "swati.kulkarni@company.com", "Marketing", "Brand Manager", (2021, 11, 25)),
    ("Arjun Nambiar", "arjun.nambiar@company.com", "Engineering", "Mobile Developer", (2023, 1, 30)),
    ("Anjali Saxena", "anjali.saxena@company.com", "Finance", "Budget Analyst", (2022, 8, 15)),
    ("Vishal Thakur", "vishal.thakur@company.com", "Sales", "Account Executive", (2023, 4, 5)),
    ("Madhuri Patil", "madhuri.patil@company.com", "HR", "Employee Relations Manager", (2020, 6, 12)),
    ("Ashish Pandey", "ashish.pandey@company.com", "Engineering", "Cloud Architect", (2021, 12, 1)),
    ("Rekha Bose", "rekha.bose@company.com", "Marketing", "Social Media Manager", (2022, 3, 18)),
    ("Gaurav Mishra", "gaurav.mishra@company.com", "Engineering", "Security Engineer", (2023, 7, 10)),
    ("Lakshmi Iyer", "lakshmi.iyer@company.com", "Finance", "Tax Consultant", (2021, 9, 22)),
    ("Tarun Jain", "tarun.jain@company.com", "Sales", "Regional Sales Manager", (2020, 10, 5)),
    ("Nisha Ghosh", "nisha.ghosh@company.com", "HR", "Compensation Analyst", (2022, 12, 8)),
    ("Aditya Pillai", "aditya.pillai@company.com", "Engineering", "Machine Learning Engineer", (2023, 2, 14)),
    ("Shweta Dubey", "shweta.dubey@company.com", "Marketing", "Product Marketing Manager", (2021, 5, 20)),
    ("Ravi Khandelwal", "ravi.khandelwal@company.com", "Engineering", "Systems Engineer", (2022, 7, 30)),
    ("Tina Kapoor", "tina.kapoor@company.com", "Finance", "Investment Analyst", (2023, 9, 11)),
    ("Karthik Reddy", "karthik.reddy@company.com", "Sales", "Sales Operations Manager", (2021, 4, 16)),
    ("Pallavi Deshmukh", "pallavi.deshmukh@company.com", "HR", "Learning & Development Manager", (2022, 2, 28)),
    ("Mohit Ahluwalia", "mohit.ahluwalia@company.com", "Engineering", "Network Engineer", (2023, 6, 19)),
    ("Asha Nair", "asha.nair@company.com", "Marketing", "SEO Specialist", (2021, 8, 7)),
    ("Pranav Shah", "pranav.shah@company.com", "Engineering", "Site Reliability Engineer", (2022, 5, 25)),
    ("Deepika Bansal", "deepika.bansal@company.com", "Finance", "Payroll Manager", (2023, 3, 9)),
    ("Sameer Vohra", "sameer.vohra@company.com", "Sales", "Key Account Manager", (2020, 11, 14)),
    ("Poornima Rao", "poornima.rao@company.com", "HR", "HR Business Partner", (2022, 9, 3)),
    ("Varun Bhatia", "varun.bhatia@company.com", "Engineering", "Database Administrator", (2021, 10, 21)),
    ("Shreya Menon", "shreya.menon@company.com", "Marketing", "Email Marketing Specialist", (2023, 4, 17)),
    ("Harish Kumar", "harish.kumar@company.com", "Engineering", "DevSecOps Engineer", (2022, 6, 13)),
    ("Ananya Sharma", "ananya.sharma@company.com", "Finance", "Financial Controller", (2021, 1, 5)),
    ("Vivek Malhotra", "vivek.malhotra@company.com", "Sales", "Channel Sales Manager", (2023, 10, 2)),
    ("Sunita Verma", "sunita.verma@company.com", "HR", "Diversity & Inclusion Manager", (2020, 3, 28)),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,staffdir_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    migration::run_migrations(&config).await?;

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        info!("Clearing {} existing employees...", existing);
        sqlx::query("DELETE FROM employees").execute(&pool).await?;
    }

    for (name, email, department, designation, (year, month, day)) in SAMPLE_EMPLOYEES {
        let date_of_joining = NaiveDate::from_ymd_opt(*year, *month, *day)
            .with_context(|| format!("Invalid date of joining for {}", name))?;

        sqlx::query(
            r#"
            INSERT INTO employees (name, email, department, designation, date_of_joining)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(designation)
        .bind(date_of_joining)
        .execute(&pool)
        .await
        .with_context(|| format!("Failed to insert {}", name))?;
    }

    pool.close().await;
    info!("Successfully seeded {} employees", SAMPLE_EMPLOYEES.len());
    Ok(())
}
