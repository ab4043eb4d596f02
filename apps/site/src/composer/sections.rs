//! Literal page content, one builder per menu choice.

use crate::composer::blocks::{link, strong, text, ContentBlock, ImageRef};
use crate::models::profile::Profile;

pub const DOWNLOAD_LABEL: &str = " 📄 Download Resume";
pub const RESUME_HREF: &str = "/resume";

const FEED_WIDGET_HEIGHT: u32 = 600;
const FEED_WIDGET_HTML: &str = r#"
<script src="https://static.elfsight.com/platform/platform.js" data-use-service-core defer></script>
<div class="elfsight-app-89d4b5f4-c11b-4309-ada1-25893ce1745c" data-elfsight-app-lazy></div>
"#;

struct Job {
    title: &'static str,
    period: &'static str,
    duties: &'static [&'static str],
}

const WORK_HISTORY: [Job; 3] = [
    Job {
        title: "Electrical Designer - Revit | Norhart Inc",
        period: "Jan 2024 - Jun 2024 | Remote - Minnesota, US",
        duties: &[
            "Lead the electrical design for multi-residential buildings utilizing Revit and Dynamo in compliance with the NEC Code (US).",
            "Support lighting calculations and cable sizing through advanced programming techniques.",
            "Conduct regular check-in meetings to present progress and deliverables to supervisors, ensuring project alignment and deadlines are met.",
        ],
    },
    Job {
        title: "BIM Specialist | Voith Hydro Latam",
        period: "Apr 2021 - Dec 2023 | Hybrid - Brazil",
        duties: &[
            "Spearheaded the implementation of BIM methodologies, significantly optimizing modernization processes for hydroelectric power plants.",
            "Managed and coordinated the 3D scanning and modeling of the Paulo Afonso IV Hydroelectric Plant.",
            "Provided international modeling support for projects in Australia, Germany, and the USA.",
            "Led training programs and development sessions, enhancing team proficiency in BIM.",
        ],
    },
    Job {
        title: "BIM Specialist | Adecco - Latam",
        period: "May 2019 - Mar 2021 | Remote - Brazil",
        duties: &[
            "Contracted through Adecco to deliver BIM modeling services for GE GridACS in São Paulo, Brazil.",
            "Acted as a training leader in Revit, Navisworks, and Dynamo across the LATAM region.",
            "Standardized 3D elements for electrical substations, ensuring consistency and efficiency.",
            "Developed BIM models for 230kV and 500kV substations, enhancing project accuracy and detail.",
        ],
    },
];

struct Degree {
    title: &'static str,
    school: &'static str,
    period: &'static str,
    summary: &'static str,
}

const EDUCATION: [Degree; 5] = [
    Degree {
        title: "Master's in Building Information Modeling (BIM)",
        school: "Polytechnic School, University of São Paulo (USP)",
        period: "2021 – 2023 | São Paulo, Brazil",
        summary: "Specialized in advanced BIM methodologies and applications in engineering and construction projects.",
    },
    Degree {
        title: "Postgraduate in Digital Architecture and Parametric Design",
        school: "Centro Universitário Belas Artes",
        period: "2020 – 2021 | São Paulo, Brazil",
        summary: "Focused on digital tools and parametric design techniques to enhance architectural workflows.",
    },
    Degree {
        title: "Bachelor in Electrical Engineering",
        school: "Faculdade de Engenharia de São Paulo (FESP)",
        period: "2013 – 2016 | São Paulo, Brazil",
        summary: "Comprehensive study in electrical engineering principles, with a focus on practical applications in various sectors.",
    },
    Degree {
        title: "Technologist in Electrical Systems",
        school: "Instituto Federal de São Paulo (IFSP)",
        period: "2010 – 2012 | São Paulo, Brazil",
        summary: "Emphasis on the development and maintenance of electrical systems.",
    },
    Degree {
        title: "Technician in Civil Construction",
        school: "Instituto Federal de São Paulo (IFSP)",
        period: "2005 – 2007 | São Paulo, Brazil",
        summary: "Gained foundational knowledge in civil construction, preparing for further specialization in engineering.",
    },
];

const TESTIMONIAL: &str = "\"Paulo is a highly professional and effective Electrical Designer. \
In only a few months, he had created an entirely new way to present electrical construction \
drawing information. A client requested fully detailed electrical drawings with material \
take-offs. Paulo created and implemented the system to deliver an exceptional set of electrical \
drawings. His BIM background clearly shines in his work, and he’s constantly seeking the best \
possible ways to complete any task. Paulo did a great job in balancing BIM automation \
customizations with the schedule of deliverables to ensure projects stayed on track. I would \
recommend Paulo as an Electrical Designer and any other BIM role.\"";
const TESTIMONIAL_AUTHOR: &str = "Mickey Halverson, PE, SE, Director of Architecture & Engineering";
const TESTIMONIAL_AUTHOR_URL: &str = "https://www.linkedin.com/in/mickey-halverson-pe-se-b69b34ba/";

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn home(profile: &Profile) -> Vec<ContentBlock> {
    let site = &profile.site;

    let hero = ContentBlock::columns(vec![
        vec![ContentBlock::Image {
            image: ImageRef::Profile,
            width: 230,
            caption: None,
        }],
        vec![
            ContentBlock::Title {
                text: site.name.clone(),
            },
            ContentBlock::plain(site.description.clone()),
            ContentBlock::DownloadButton {
                label: DOWNLOAD_LABEL.to_string(),
                file_name: profile.resume.file_name.clone(),
                mime: profile.resume.mime.to_string(),
                href: RESUME_HREF.to_string(),
            },
            email_line(&site.email),
        ],
    ]);

    // One column per social link.
    let social = (!site.social_media.is_empty()).then(|| {
        ContentBlock::columns(
            site.social_media
                .iter()
                .map(|l| {
                    vec![ContentBlock::Link {
                        label: l.label.clone(),
                        url: l.url.clone(),
                    }]
                })
                .collect(),
        )
    });

    let mut blocks = vec![
        hero,
        ContentBlock::Spacer,
        ContentBlock::heading(2, "Experience & Qualifications"),
        ContentBlock::bullets(
            Some("✔️"),
            [
                "Specialized in advanced BIM methodologies and applications in engineering and construction projects",
                "Strong hands-on experience and knowledge in Revit, Dynamo, Navisworks, and Inventor",
                "Excellent team player with a strong sense of initiative on tasks",
            ],
        ),
        ContentBlock::heading(2, "My Linkedin Feed"),
        ContentBlock::EmbeddedHtml {
            html: FEED_WIDGET_HTML.to_string(),
            height: FEED_WIDGET_HEIGHT,
        },
        ContentBlock::Spacer,
    ];
    blocks.extend(social);
    blocks.extend([
        ContentBlock::Spacer,
        ContentBlock::heading(2, "Technical Skills"),
        ContentBlock::BulletList {
            marker: None,
            items: vec![
                vec![text(
                    "👩‍💻 Software: Revit Architecture, Revit MEP, Navisworks, Dynamo, Inventor",
                )],
                vec![text("📊 Languages: Italian, English, Portuguese")],
            ],
        },
        ContentBlock::Spacer,
        ContentBlock::heading(2, "Work History"),
        ContentBlock::Divider,
    ]);

    for (i, job) in WORK_HISTORY.iter().enumerate() {
        if i > 0 {
            blocks.push(ContentBlock::Spacer);
        }
        blocks.push(ContentBlock::paragraph(vec![text("🚧 "), strong(job.title)]));
        blocks.push(ContentBlock::plain(job.period));
        blocks.push(ContentBlock::bullets(Some("►"), job.duties.iter().copied()));
    }

    blocks
}

pub fn projects(profile: &Profile) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::heading(2, "Projects & Accomplishments"),
        ContentBlock::Divider,
    ];
    blocks.extend(profile.site.projects.iter().map(|p| ContentBlock::Link {
        label: p.label.clone(),
        url: p.url.clone(),
    }));
    blocks
}

pub fn contact(profile: &Profile) -> Vec<ContentBlock> {
    vec![
        ContentBlock::heading(2, "Contact"),
        ContentBlock::Divider,
        ContentBlock::plain("Feel free to reach out via email or phone:"),
        email_line(&profile.site.email),
        ContentBlock::paragraph(vec![text("📞 "), text(profile.site.phone.clone())]),
    ]
}

pub fn testimonials(_profile: &Profile) -> Vec<ContentBlock> {
    vec![
        ContentBlock::heading(2, "Testimonials"),
        ContentBlock::Divider,
        ContentBlock::Columns {
            weights: vec![1, 4],
            columns: vec![
                vec![ContentBlock::Image {
                    image: ImageRef::Testimonial,
                    width: 100,
                    caption: None,
                }],
                vec![
                    ContentBlock::plain(TESTIMONIAL),
                    ContentBlock::paragraph(vec![
                        text("— "),
                        link(TESTIMONIAL_AUTHOR, TESTIMONIAL_AUTHOR_URL),
                    ]),
                ],
            ],
        },
    ]
}

pub fn education(_profile: &Profile) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::heading(2, "Education"), ContentBlock::Divider];
    for (i, degree) in EDUCATION.iter().enumerate() {
        if i > 0 {
            blocks.push(ContentBlock::Spacer);
        }
        blocks.push(ContentBlock::heading(3, degree.title));
        blocks.push(ContentBlock::paragraph(vec![strong(degree.school)]));
        blocks.push(ContentBlock::plain(degree.period));
        blocks.push(ContentBlock::bullets(None, [degree.summary]));
    }
    blocks
}

fn email_line(email: &str) -> ContentBlock {
    ContentBlock::paragraph(vec![text("📫 "), text(email)])
}
