use crate::frontend::backdrop::{ParallaxLayers, ParticleField, RotatingShapes};
use crate::frontend::form::ContactFormCard;
use crate::frontend::reveal::Reveal;
use crate::frontend::view_mode::ViewModeToggle;
use crate::model::{
    Certificate, ExperienceEntry, ExperienceMode, Project, ProjectsMode, SkillItem, SkillsMode,
    ABOUT_PARAGRAPHS, ABOUT_STATS, CERTIFICATES, CONTACT_CHANNELS, EDUCATION, EXPERIENCES,
    PROFILE, PROJECTS, SOCIAL_LINKS, SOFT_SKILLS, TECHNICAL_SKILLS,
};
use crate::motion::RevealPreset;
use crate::theme::Theme;
use yew::prelude::*;

const STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <Reveal class="section-title">
            <h2>{props.title.clone()}</h2>
            <p class="section-subtitle">{props.subtitle.clone()}</p>
            <span class="section-rule" aria-hidden="true"></span>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <ParticleField theme={props.theme} />
            <ParallaxLayers />
            <RotatingShapes />

            <div class="hero-inner">
                <Reveal preset={RevealPreset::SlideLeft} duration_ms={640}>
                    <h1 class="hero-name">
                        {"Hi, I'm "}<span class="accent-text">{PROFILE.name}</span>
                    </h1>
                    <p class="hero-role">{PROFILE.role}</p>
                    <p class="hero-intro">{PROFILE.intro}</p>

                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#contact">{"Contact Me"}</a>
                        <a class="btn btn-outline" href="#projects">{"View Projects"}</a>
                    </div>

                    <div class="hero-socials">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                class="social-link"
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={link.label}
                            >
                                {link.label}
                            </a>
                        }) }
                    </div>
                </Reveal>

                <Reveal preset={RevealPreset::SlideRight} duration_ms={640} delay_ms={200}>
                    <div class="hero-portrait">
                        <img
                            class="portrait-media"
                            src={PROFILE.portrait}
                            alt={PROFILE.portrait_alt}
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section-block">
            <SectionTitle
                title="About Me"
                subtitle="Learn more about my background and experience"
            />

            <div class="about-grid">
                <Reveal preset={RevealPreset::SlideLeft}>
                    <h3>{"Who am I?"}</h3>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                        <p class="about-copy">{*paragraph}</p>
                    }) }
                </Reveal>

                <div class="stat-grid">
                    { for ABOUT_STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal
                            preset={RevealPreset::ZoomIn}
                            delay_ms={index as u32 * STAGGER_MS}
                            class="stat-card"
                        >
                            <h4>{stat.label}</h4>
                            <p class="stat-value">{stat.value}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn skill_card(index: usize, skill: &SkillItem) -> Html {
    html! {
        <Reveal delay_ms={index as u32 * STAGGER_MS} class="skill-card">
            <h4>{skill.name}</h4>
            <div class="level-track">
                <span class="level-fill" style={format!("width: {}%;", skill.level)}></span>
            </div>
        </Reveal>
    }
}

fn skill_bar(index: usize, skill: &SkillItem) -> Html {
    html! {
        <Reveal
            preset={RevealPreset::SlideLeft}
            delay_ms={index as u32 * STAGGER_MS}
            class="skill-bar"
        >
            <div class="skill-bar-heading">
                <span>{skill.name}</span>
                <span class="muted">{format!("{}%", skill.level)}</span>
            </div>
            <div class="level-track">
                <span class="level-fill" style={format!("width: {}%;", skill.level)}></span>
            </div>
        </Reveal>
    }
}

fn skill_group(heading: &'static str, skills: &'static [SkillItem], mode: SkillsMode) -> Html {
    // Mode picks the arrangement; both branches walk the same slice.
    let items = skills.iter().enumerate();

    html! {
        <div class="skill-group">
            <h3>{heading}</h3>
            {
                match mode {
                    SkillsMode::Grid => html! {
                        <div class="skill-grid">
                            { for items.map(|(index, skill)| skill_card(index, skill)) }
                        </div>
                    },
                    SkillsMode::Bars => html! {
                        <div class="skill-list">
                            { for items.map(|(index, skill)| skill_bar(index, skill)) }
                        </div>
                    },
                }
            }
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let mode = use_state_eq(SkillsMode::default);
    let on_select = {
        let mode = mode.clone();
        Callback::from(move |next| mode.set(next))
    };

    html! {
        <section id="skills" class="section-block section-tinted">
            <SectionTitle
                title="My Skills"
                subtitle="A showcase of my technical abilities and soft skills"
            />

            <ViewModeToggle<SkillsMode> active={*mode} on_select={on_select} label="Skills layout" />

            { skill_group("Technical Skills", TECHNICAL_SKILLS, *mode) }
            { skill_group("Soft Skills", SOFT_SKILLS, *mode) }
        </section>
    }
}

fn experience_card(entry: &ExperienceEntry) -> Html {
    html! {
        <article class="experience-card">
            <h3>{entry.title}</h3>
            <p class="experience-company">{entry.company}</p>
            <p class="muted">{entry.period}</p>
            <p>{entry.description}</p>
            <div class="tag-row">
                { for entry.skills.iter().map(|skill| html! {
                    <span class="tag">{*skill}</span>
                }) }
            </div>
        </article>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let mode = use_state_eq(ExperienceMode::default);
    let on_select = {
        let mode = mode.clone();
        Callback::from(move |next| mode.set(next))
    };

    let entries = EXPERIENCES.iter().enumerate();
    let body = match *mode {
        ExperienceMode::Timeline => html! {
            <div class="timeline">
                <span class="timeline-rule" aria-hidden="true"></span>
                { for entries.map(|(index, entry)| {
                    let preset = if index % 2 == 0 {
                        RevealPreset::SlideLeft
                    } else {
                        RevealPreset::SlideRight
                    };
                    let side = if index % 2 == 0 { "timeline-entry-left" } else { "timeline-entry-right" };

                    html! {
                        <div class={classes!("timeline-entry", side)}>
                            <span class="timeline-dot" aria-hidden="true"></span>
                            <Reveal preset={preset} delay_ms={index as u32 * STAGGER_MS}>
                                { experience_card(entry) }
                            </Reveal>
                        </div>
                    }
                }) }
            </div>
        },
        ExperienceMode::Cards => html! {
            <div class="experience-grid">
                { for entries.map(|(index, entry)| html! {
                    <Reveal delay_ms={index as u32 * STAGGER_MS}>
                        { experience_card(entry) }
                    </Reveal>
                }) }
            </div>
        },
    };

    html! {
        <section id="experience" class="section-block">
            <SectionTitle
                title="Work Experience"
                subtitle="My professional journey in project management and research"
            />

            <ViewModeToggle<ExperienceMode>
                active={*mode}
                on_select={on_select}
                label="Experience layout"
            />

            { body }
        </section>
    }
}

fn project_links(project: &Project) -> Html {
    html! {
        <div class="project-links">
            if let Some(url) = project.github {
                <a
                    class="project-link"
                    href={url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View repository"
                >
                    {"Code"}
                </a>
            }
            if let Some(url) = project.demo {
                <a
                    class="project-link"
                    href={url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View live demo"
                >
                    {"Demo"}
                </a>
            }
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="project-card">
            <div class="project-media-frame">
                <img class="project-media" src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-copy">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tag-row">
                    { for project.tags.iter().map(|tag| html! {
                        <span class="tag">{*tag}</span>
                    }) }
                </div>
                { project_links(project) }
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let mode = use_state_eq(ProjectsMode::default);
    let on_select = {
        let mode = mode.clone();
        Callback::from(move |next| mode.set(next))
    };

    let entries = PROJECTS.iter().enumerate();
    let body = match *mode {
        ProjectsMode::Grid => html! {
            <div class="project-grid">
                { for entries.map(|(index, project)| html! {
                    <Reveal delay_ms={index as u32 * STAGGER_MS}>
                        { project_card(project) }
                    </Reveal>
                }) }
            </div>
        },
        ProjectsMode::Showcase => html! {
            <div class="project-showcase">
                { for entries.map(|(index, project)| html! {
                    <Reveal
                        preset={RevealPreset::Flip}
                        delay_ms={index as u32 * STAGGER_MS}
                        class="showcase-slot"
                    >
                        { project_card(project) }
                    </Reveal>
                }) }
            </div>
        },
    };

    html! {
        <section id="projects" class="section-block section-tinted">
            <SectionTitle
                title="My Projects"
                subtitle="Explore some of my recent work in web development and electronics"
            />

            <ViewModeToggle<ProjectsMode>
                active={*mode}
                on_select={on_select}
                label="Projects layout"
            />

            { body }
        </section>
    }
}

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <section id="education" class="section-block">
            <SectionTitle
                title="Education"
                subtitle="My academic background and qualifications"
            />

            <div class="education-column">
                { for EDUCATION.iter().map(|entry| html! {
                    <Reveal class="education-card">
                        <h3>{entry.degree}</h3>
                        <p class="accent-text">{entry.field}</p>
                        <p class="muted">{format!("{}, {}", entry.institution, entry.location)}</p>
                        <p class="muted">{entry.period}</p>
                        <p>{entry.description}</p>
                        <div class="education-courses">
                            <h4>{"Key Courses"}</h4>
                            <div class="tag-row">
                                { for entry.courses.iter().map(|course| html! {
                                    <span class="tag">{*course}</span>
                                }) }
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn certificate_card(index: usize, certificate: &Certificate) -> Html {
    html! {
        <Reveal
            preset={RevealPreset::ZoomIn}
            delay_ms={index as u32 * STAGGER_MS}
            class="certificate-card"
        >
            <img
                class="certificate-media"
                src={certificate.image}
                alt={certificate.title}
                loading="lazy"
            />
            <div class="certificate-copy">
                <h3>{certificate.title}</h3>
                <p class="muted">{format!("{} · {}", certificate.issuer, certificate.date)}</p>
                if let Some(url) = certificate.verify_url {
                    <a
                        class="certificate-link"
                        href={url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Verify"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                }
            </div>
        </Reveal>
    }
}

#[function_component(Certifications)]
pub fn certifications() -> Html {
    html! {
        <section id="certifications" class="section-block">
            <SectionTitle
                title="Certifications"
                subtitle="Credentials and completed programs"
            />

            <div class="certificate-grid">
                { for CERTIFICATES.iter().enumerate().map(|(index, certificate)| {
                    certificate_card(index, certificate)
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section-block section-tinted">
            <SectionTitle
                title="Contact Me"
                subtitle="Get in touch for collaborations or inquiries"
            />

            <div class="contact-grid">
                <div class="contact-channels">
                    <h3>{"Let's Connect"}</h3>
                    <p class="muted">
                        {"I'm always open to discussing new projects, creative ideas, \
                          or opportunities to be part of your vision."}
                    </p>
                    { for CONTACT_CHANNELS.iter().enumerate().map(|(index, channel)| html! {
                        <Reveal
                            preset={RevealPreset::SlideLeft}
                            delay_ms={index as u32 * STAGGER_MS}
                            class="channel-card"
                        >
                            <h4>{channel.title}</h4>
                            if let Some(href) = channel.href {
                                <a class="channel-value" href={href}>{channel.value}</a>
                            } else {
                                <p class="channel-value">{channel.value}</p>
                            }
                        </Reveal>
                    }) }
                </div>

                <Reveal class="contact-form-panel">
                    <ContactFormCard />
                </Reveal>
            </div>
        </section>
    }
}
