use chrono::{DateTime, Utc};
use rand::Rng;

use crate::model::{StudyChapter, StudyGoal, StudySubject};
use crate::util::generate_id;

pub struct ExamTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub subjects: &'static [(&'static str, &'static [&'static str])],
}

pub const EXAM_TEMPLATES: &[ExamTemplate] = &[
    ExamTemplate {
        name: "UPSC CSE",
        icon: "🏛️",
        subjects: &[
            (
                "Indian Polity",
                &[
                    "Constitution",
                    "Parliament",
                    "Judiciary",
                    "State Government",
                    "Local Government",
                    "Fundamental Rights",
                    "DPSP",
                ],
            ),
            (
                "Indian Economy",
                &[
                    "GDP & Growth",
                    "Banking",
                    "Fiscal Policy",
                    "Agriculture",
                    "Industry",
                    "External Sector",
                ],
            ),
            (
                "Geography",
                &[
                    "Physical Geography",
                    "Indian Geography",
                    "Monsoons",
                    "Soil & Vegetation",
                    "Minerals",
                    "Population",
                ],
            ),
            (
                "History",
                &[
                    "Ancient India",
                    "Medieval India",
                    "Modern India",
                    "Art & Culture",
                    "World History",
                ],
            ),
            (
                "Science & Tech",
                &[
                    "Space Technology",
                    "Biotechnology",
                    "IT",
                    "Defence Tech",
                    "Health & Disease",
                ],
            ),
            (
                "Environment",
                &[
                    "Ecology",
                    "Biodiversity",
                    "Climate Change",
                    "Environmental Laws",
                    "Pollution",
                ],
            ),
        ],
    },
    ExamTemplate {
        name: "JEE Main",
        icon: "⚡",
        subjects: &[
            (
                "Physics",
                &[
                    "Mechanics",
                    "Thermodynamics",
                    "Electrostatics",
                    "Magnetism",
                    "Optics",
                    "Modern Physics",
                    "Waves",
                ],
            ),
            (
                "Chemistry",
                &[
                    "Organic",
                    "Inorganic",
                    "Physical Chemistry",
                    "Coordination Compounds",
                    "Polymers",
                ],
            ),
            (
                "Mathematics",
                &[
                    "Calculus",
                    "Algebra",
                    "Trigonometry",
                    "Coordinate Geometry",
                    "Statistics",
                    "Probability",
                ],
            ),
        ],
    },
    ExamTemplate {
        name: "NEET",
        icon: "🩺",
        subjects: &[
            (
                "Biology",
                &[
                    "Cell Biology",
                    "Genetics",
                    "Ecology",
                    "Human Physiology",
                    "Plant Physiology",
                    "Evolution",
                ],
            ),
            (
                "Physics",
                &[
                    "Mechanics",
                    "Electrodynamics",
                    "Optics",
                    "Modern Physics",
                    "Thermodynamics",
                ],
            ),
            (
                "Chemistry",
                &["Organic", "Inorganic", "Physical Chemistry", "Biomolecules"],
            ),
        ],
    },
];

/// Case-insensitive lookup by template name.
pub fn find_template(name: &str) -> Option<&'static ExamTemplate> {
    let needle = name.trim();
    EXAM_TEMPLATES
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(needle))
}

pub struct GoalDraft<'a> {
    pub name: &'a str,
    pub target_date: &'a str,
    pub hours_per_chapter: f64,
}

pub fn build_goal<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    template: &ExamTemplate,
    draft: GoalDraft<'_>,
) -> StudyGoal {
    let subjects = template
        .subjects
        .iter()
        .map(|(subject, chapters)| StudySubject {
            id: generate_id(&mut *rng, now),
            name: subject.to_string(),
            chapters: chapters
                .iter()
                .map(|chapter| StudyChapter {
                    id: generate_id(&mut *rng, now),
                    name: chapter.to_string(),
                    completed: false,
                    estimated_hours: draft.hours_per_chapter,
                })
                .collect(),
        })
        .collect();

    StudyGoal {
        id: generate_id(rng, now),
        name: draft.name.to_string(),
        template: template.name.to_string(),
        subjects,
        target_date: draft.target_date.to_string(),
        created_at: now,
    }
}

/// Flips one chapter's completion flag. Returns false when the subject or
/// chapter is not part of the tree.
pub fn toggle_chapter(subjects: &mut [StudySubject], subject: &str, chapter: &str) -> bool {
    let found = subjects
        .iter_mut()
        .find(|item| item.name.eq_ignore_ascii_case(subject) || item.id == subject)
        .and_then(|item| {
            item.chapters
                .iter_mut()
                .find(|ch| ch.name.eq_ignore_ascii_case(chapter) || ch.id == chapter)
        });
    match found {
        Some(ch) => {
            ch.completed = !ch.completed;
            true
        }
        None => false,
    }
}
