//! Built-in course content
//!
//! The scripted material the simulations replay: scaffolding steps, the
//! deployment console, the git terminal exercise, the scripted branch
//! workflow, and the seed recruitment roster.

use crate::domain::branch::CommitKind;
use crate::domain::candidate::{Candidate, Roster, Stage};
use crate::domain::step::PlaybackStep;
use crate::domain::workflow::WorkflowStep;
use crate::drill::DrillStep;
use crate::tasks::{Task, TaskList};

/// Delay between scripted workflow actions, in milliseconds
pub const WORKFLOW_STEP_DELAY_MS: u64 = 2000;

/// The project-scaffolding playback
pub fn scaffold_steps() -> Vec<PlaybackStep> {
    vec![
        PlaybackStep::new(
            "Creating a new Next.js app...",
            1000,
            "Sets up the base architecture of the application following current conventions.",
        ),
        PlaybackStep::new(
            "Installing dependencies...",
            2000,
            "Pulls the essential packages the application is built on.",
        ),
        PlaybackStep::new(
            "Installing react...",
            800,
            "React, the core library used to build the interactive interface.",
        ),
        PlaybackStep::new(
            "Installing react-dom...",
            800,
            "React DOM renders components in the browser and batches interface updates.",
        ),
        PlaybackStep::new(
            "Installing typescript...",
            1000,
            "TypeScript adds a type system that hardens the code and eases maintenance.",
        ),
        PlaybackStep::new(
            "Installing tailwindcss...",
            1000,
            "Tailwind CSS, a utility-first framework that speeds up interface styling.",
        ),
        PlaybackStep::new(
            "Initializing git repository...",
            500,
            "Version control from the first minute: track every change and collaborate.",
        ),
        PlaybackStep::new(
            "Creating project structure...",
            1500,
            "Lays files out along Next.js conventions so the project scales cleanly.",
        ),
        PlaybackStep::new(
            "Success! Project is ready!",
            0,
            "The development environment is ready with ecosystem best practices applied.",
        ),
    ]
}

/// The deployment console playback
pub fn deployment_steps() -> Vec<PlaybackStep> {
    vec![
        PlaybackStep::new(
            "Preparing project...",
            1000,
            "Pre-flight checks before anything ships.",
        )
        .with_output(vec![
            "✓ Code pushed to GitHub".to_string(),
            "✓ Environment variables configured".to_string(),
            "✓ Test suite green".to_string(),
        ]),
        PlaybackStep::new(
            "Connecting to Vercel...",
            1500,
            "Links the repository to the hosting platform.",
        )
        .with_output(vec![
            "Linked GitHub account".to_string(),
            "Imported repository".to_string(),
            "Project configured".to_string(),
        ]),
        PlaybackStep::new(
            "Building...",
            2000,
            "Compiles the application into its production bundle.",
        )
        .with_output(vec!["Build completed in 45s".to_string()]),
        PlaybackStep::new(
            "Running tests...",
            1000,
            "Runs the checks one last time against the production build.",
        )
        .with_output(vec!["Tests completed in 15s".to_string()]),
        PlaybackStep::new(
            "Deploying...",
            1500,
            "Publishes the build to the edge network.",
        )
        .with_output(vec!["Deployment completed in 30s".to_string()]),
        PlaybackStep::new(
            "Deployment complete! Your site is live.",
            0,
            "The application is now served in production.",
        ),
    ]
}

/// The git terminal exercise
pub fn git_drill_steps() -> Vec<DrillStep> {
    vec![
        DrillStep {
            command: "git init".to_string(),
            output: vec!["Initialized empty Git repository in your-project/.git/".to_string()],
            description: "Create the local Git repository".to_string(),
            hint: "Initializes an empty repository: a hidden .git directory that will hold \
                   the full history of your code."
                .to_string(),
            success: "✅ Repository initialized".to_string(),
        },
        DrillStep {
            command: "git add .".to_string(),
            output: vec![],
            description: "Stage your files".to_string(),
            hint: "Adds every file to the staging area. Like packing a parcel: you pick \
                   what goes into the next commit."
                .to_string(),
            success: "✅ Files added to the staging area".to_string(),
        },
        DrillStep {
            command: "git commit -m \"Initial commit\"".to_string(),
            output: vec![
                "[master (root-commit) 28a3650] Initial commit".to_string(),
                "12 files changed, 350 insertions(+)".to_string(),
                "create mode 100644 package.json".to_string(),
                "create mode 100644 README.md".to_string(),
                "...".to_string(),
            ],
            description: "Record the first commit".to_string(),
            hint: "The quoted message describes the change set.".to_string(),
            success: "✅ First commit recorded".to_string(),
        },
        DrillStep {
            command: "git remote add origin https://github.com/username/your-project.git"
                .to_string(),
            output: vec![],
            description: "Link the local repository to GitHub".to_string(),
            hint: "Replace the URL with your own repository's URL.".to_string(),
            success: "✅ Remote configured, your project is ready".to_string(),
        },
        DrillStep {
            command: "git push -u origin master".to_string(),
            output: vec![
                "Enumerating objects: 15, done.".to_string(),
                "Counting objects: 100% (15/15), done.".to_string(),
                "Delta compression using up to 8 threads".to_string(),
                "Compressing objects: 100% (13/13), done.".to_string(),
                "Writing objects: 100% (15/15), 1.62 KiB | 1.62 MiB/s, done.".to_string(),
                "Total 15 (delta 0), reused 0 (delta 0)".to_string(),
                "To https://github.com/username/your-project.git".to_string(),
                " * [new branch] master -> master".to_string(),
                "Branch 'master' set up to track remote branch 'master' from 'origin'."
                    .to_string(),
            ],
            description: "Publish your code to GitHub".to_string(),
            hint: "This step can also be done later.".to_string(),
            success: "✅ Code pushed to GitHub".to_string(),
        },
    ]
}

/// The scripted branch workflow replayed by the sandbox's simulation
pub fn workflow_script() -> Vec<WorkflowStep> {
    let d = WORKFLOW_STEP_DELAY_MS;
    vec![
        WorkflowStep::branch("feature/auth", "main", d),
        WorkflowStep::commit("feature/auth", "Add login form component", CommitKind::Feature, d),
        WorkflowStep::commit(
            "feature/auth",
            "Implement OAuth authentication",
            CommitKind::Feature,
            d,
        ),
        WorkflowStep::branch("hotfix/security", "main", d),
        WorkflowStep::commit(
            "hotfix/security",
            "Fix security vulnerability in API",
            CommitKind::Hotfix,
            d,
        ),
        WorkflowStep::branch("feature/dashboard", "main", d),
        WorkflowStep::commit(
            "feature/dashboard",
            "Add user statistics widget",
            CommitKind::Feature,
            d,
        ),
        WorkflowStep::commit(
            "feature/dashboard",
            "Implement data visualization",
            CommitKind::Feature,
            d,
        ),
        WorkflowStep::commit(
            "feature/dashboard",
            "Fix chart rendering bug",
            CommitKind::Bugfix,
            d,
        ),
    ]
}

/// The branch sandbox checklist
pub fn git_tasks() -> TaskList {
    TaskList::new(vec![
        Task::new(
            1,
            "Create a branch 'feature/header' from main",
            "This branch will hold the work on the application header.",
        ),
        Task::new(
            2,
            "Add a commit on feature/header",
            "For example: 'Add navigation menu'.",
        ),
        Task::new(
            3,
            "Merge feature/header into main",
            "Once the feature is done, fold it back into main.",
        ),
    ])
}

/// Name pool for generated applicants
pub fn candidate_names() -> &'static [&'static str] {
    &[
        "Alex Martin",
        "Sam Dubois",
        "Julie Chen",
        "Chris Wilson",
        "Emma Bernard",
        "Lucas Silva",
        "Sarah Cohen",
        "Max Laurent",
    ]
}

/// Role pool for candidates
pub fn roles() -> &'static [&'static str] {
    &[
        "Frontend Developer",
        "Backend Developer",
        "DevOps Engineer",
        "Data Engineer",
        "Tech Lead",
    ]
}

/// The recruitment roster the pipeline simulation starts from
pub fn seed_roster() -> Roster {
    Roster::from_candidates(vec![
        Candidate::with_stage(
            "Marie Laurent",
            "Frontend Developer",
            Stage::Interview,
            3,
            &["React", "TypeScript"],
        ),
        Candidate::with_stage(
            "Thomas Dubois",
            "Backend Developer",
            Stage::Interview,
            5,
            &["Node.js", "Python"],
        ),
        Candidate::with_stage(
            "Sophie Chen",
            "DevOps Engineer",
            Stage::New,
            4,
            &["Docker", "Kubernetes"],
        ),
        Candidate::with_stage(
            "Lucas Martin",
            "Frontend Developer",
            Stage::Offer,
            7,
            &["React", "Vue.js"],
        ),
        Candidate::with_stage(
            "Emma Bernard",
            "Tech Lead",
            Stage::Interview,
            8,
            &["Java", "Spring"],
        ),
        Candidate::with_stage(
            "Alexandre Petit",
            "Data Engineer",
            Stage::New,
            2,
            &["Python", "SQL"],
        ),
        Candidate::with_stage(
            "Julie Moreau",
            "Backend Developer",
            Stage::Hired,
            6,
            &["Java", "Spring Boot"],
        ),
        Candidate::with_stage(
            "Hugo Leroy",
            "DevOps Engineer",
            Stage::Interview,
            4,
            &["AWS", "Terraform"],
        ),
    ])
}
