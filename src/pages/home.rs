use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::info;

use crate::components::counter::AnimatedCounter;
use crate::components::divider::GoldDivider;
use crate::components::fade_in::{FadeDirection, FadeIn};
use crate::config;
use crate::data;

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let background = format!("background-image: url('{}');", config::HERO_BG_IMAGE);

    html! {
        <section class="hero">
            <div class="hero-bg" style={background}></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <div class="hero-eyebrow">
                    <span class="eyebrow-line"></span>
                    <span class="eyebrow-text">{"Since 1998 · Tokyo"}</span>
                </div>
                <h1 class="hero-title">
                    {"あなたの権利を、"}
                    <br />
                    <span class="accent">{"全力で守る。"}</span>
                </h1>
                <p class="hero-subtitle">{"Protecting Your Rights with Integrity"}</p>
                <p class="hero-description">
                    {"創業25年以上の実績と信頼。企業法務から個人の法律問題まで、経験豊富な弁護士チームが丁寧にサポートいたします。初回相談は無料です。まずはお気軽にご連絡ください。"}
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="hero-button primary">{"無料相談を予約する"}</a>
                    <a href="#services" class="hero-button secondary">{"業務内容を見る"}</a>
                </div>
            </div>
            <div class="scroll-indicator">
                <span>{"Scroll"}</span>
                <div class="scroll-chevron">{"⌄"}</div>
            </div>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    html! {
        <section class="stats">
            <div class="section-inner stats-grid">
                {
                    data::STATISTICS.iter().enumerate().map(|(i, stat)| {
                        html! {
                            <FadeIn delay_ms={(i as u32) * 100} class="stat-cell">
                                <div class="stat-value">
                                    <AnimatedCounter value={stat.value} suffix={stat.suffix} />
                                    <span class="stat-unit">{stat.unit}</span>
                                </div>
                                <div class="stat-label">{stat.label}</div>
                            </FadeIn>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let highlights = [
        ("🛡️", "守秘義務の徹底"),
        ("⏰", "迅速な対応"),
        ("🏅", "豊富な実績"),
        ("👥", "チーム体制"),
    ];

    html! {
        <section id="about" class="about">
            <div class="section-inner about-grid">
                <FadeIn direction={FadeDirection::Left} class="about-visual">
                    <img src={config::OFFICE_IMAGE} alt="事務所内観" class="about-image" />
                    <div class="about-card">
                        <div class="about-card-year">{config::FOUNDED_YEAR}</div>
                        <div class="about-card-label">{"創業年"}</div>
                        <div class="about-card-rule"></div>
                        <div class="about-card-place">{"東京都千代田区"}</div>
                    </div>
                </FadeIn>

                <FadeIn direction={FadeDirection::Right}>
                    <div class="section-number">{"01 — ABOUT US"}</div>
                    <GoldDivider />
                    <h2 class="section-title">
                        {"依頼者の利益を最優先に、"}
                        <br />
                        {"誠実に向き合う法律事務所"}
                    </h2>
                    <p class="section-text">
                        {"山田・鈴木法律事務所は、1998年の創業以来、東京を拠点として企業法務・民事訴訟・刑事弁護など幅広い法律問題に対応してまいりました。"}
                    </p>
                    <p class="section-text">
                        {"私たちは「依頼者の立場に立ち、最善の解決策を提供する」という理念のもと、複雑な法律問題をわかりやすく説明し、依頼者が安心して手続きを進められるよう全力でサポートいたします。"}
                    </p>
                    <div class="about-highlights">
                        {
                            highlights.iter().map(|(icon, text)| {
                                html! {
                                    <div class="about-highlight">
                                        <span class="highlight-icon">{*icon}</span>
                                        <span>{*text}</span>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <a href="#attorneys" class="text-link">{"弁護士を紹介する →"}</a>
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-inner">
                <FadeIn class="section-header">
                    <div class="section-number">{"02 — PRACTICE AREAS"}</div>
                    <GoldDivider />
                    <div class="section-header-row">
                        <h2 class="section-title">{"業務内容"}</h2>
                        <p class="section-lead">
                            {"幅広い法律分野において、専門知識と豊富な経験を活かした質の高いリーガルサービスを提供します。"}
                        </p>
                    </div>
                </FadeIn>

                <div class="services-grid">
                    {
                        data::SERVICES.iter().enumerate().map(|(i, service)| {
                            html! {
                                <FadeIn delay_ms={(i as u32) * 80}>
                                    <div class="service-card">
                                        <div class="service-icon">{service.icon}</div>
                                        <h3 class="service-title">{service.title}</h3>
                                        <p class="service-description">{service.description}</p>
                                        <ul class="service-items">
                                            {
                                                service.items.iter().map(|item| {
                                                    html! { <li>{*item}</li> }
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </div>
                                </FadeIn>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(AttorneysSection)]
fn attorneys_section() -> Html {
    html! {
        <section id="attorneys" class="attorneys">
            <div class="section-inner">
                <FadeIn class="section-header">
                    <div class="section-number">{"03 — OUR ATTORNEYS"}</div>
                    <GoldDivider />
                    <h2 class="section-title">{"弁護士紹介"}</h2>
                </FadeIn>

                {
                    data::ATTORNEYS.iter().enumerate().map(|(i, attorney)| {
                        // Odd rows flip the photo/info columns.
                        let row_class = classes!("attorney-row", (i % 2 == 1).then(|| "reverse"));
                        html! {
                            <FadeIn delay_ms={(i as u32) * 100}>
                                <div class={row_class}>
                                    <div class="attorney-photo">
                                        <div class="attorney-photo-number">{format!("{:02}", i + 1)}</div>
                                        <div class="attorney-photo-name">
                                            <div class="photo-name-jp">{attorney.name}</div>
                                            <div class="photo-name-en">{attorney.name_en}</div>
                                        </div>
                                    </div>
                                    <div class="attorney-info">
                                        <span class="attorney-badge">{attorney.title}</span>
                                        <h3 class="attorney-name">{attorney.name}</h3>
                                        <p class="attorney-name-en">{attorney.name_en}</p>
                                        <GoldDivider />
                                        <p class="attorney-bio">{attorney.bio}</p>
                                        <div class="attorney-details">
                                            <div>
                                                <div class="detail-label">{"所属・登録"}</div>
                                                <div class="detail-value">{attorney.bar}</div>
                                                <div class="detail-sub">{attorney.registered}</div>
                                            </div>
                                            <div>
                                                <div class="detail-label">{"専門分野"}</div>
                                                <div class="detail-value">{attorney.specialty}</div>
                                            </div>
                                            <div>
                                                <div class="detail-label">{"学歴"}</div>
                                                <div class="detail-value">{attorney.education}</div>
                                            </div>
                                            <div>
                                                <div class="detail-label">{"受賞歴"}</div>
                                                {
                                                    attorney.awards.iter().map(|award| {
                                                        html! { <div class="detail-award">{"★ "}{*award}</div> }
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                { if i + 1 < data::ATTORNEYS.len() { html! { <div class="attorney-rule"></div> } } else { html! {} } }
                            </FadeIn>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(ResultsSection)]
fn results_section() -> Html {
    html! {
        <section id="results" class="results">
            <div class="section-inner">
                <FadeIn class="section-header">
                    <div class="section-number">{"04 — CASE RESULTS"}</div>
                    <GoldDivider />
                    <div class="section-header-row">
                        <h2 class="section-title light">{"解決実績"}</h2>
                        <p class="section-lead light">
                            {"※掲載事例はすべて依頼者の同意を得た上で、個人情報を加工・匿名化したものです。"}
                        </p>
                    </div>
                </FadeIn>

                <div class="results-grid">
                    {
                        data::CASE_RESULTS.iter().enumerate().map(|(i, case)| {
                            html! {
                                <FadeIn delay_ms={(i as u32) * 100}>
                                    <div class="result-card">
                                        <div class="result-card-top">
                                            <span class="result-category">{case.category}</span>
                                            <span class="result-outcome">{case.outcome}</span>
                                        </div>
                                        <h3 class="result-title">{case.title}</h3>
                                        {
                                            if let Some(amount) = case.amount {
                                                html! { <div class="result-amount">{amount}</div> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <p class="result-description">{case.description}</p>
                                    </div>
                                </FadeIn>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    html! {
        <section class="testimonials">
            <div class="section-inner">
                <FadeIn class="section-header">
                    <div class="section-number">{"05 — TESTIMONIALS"}</div>
                    <GoldDivider />
                    <h2 class="section-title">{"依頼者の声"}</h2>
                </FadeIn>

                <div class="testimonials-grid">
                    {
                        data::TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                            html! {
                                <FadeIn delay_ms={(i as u32) * 100}>
                                    <div class="testimonial-card">
                                        <div class="testimonial-mark">{"“"}</div>
                                        <p class="testimonial-quote">{t.quote}</p>
                                        <div class="testimonial-author">
                                            <div class="testimonial-initials">{t.initials}</div>
                                            <div class="testimonial-detail">{t.detail}</div>
                                        </div>
                                        <div class="testimonial-stars">{"★★★★★"}</div>
                                    </div>
                                </FadeIn>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

/// Accordion transition: selecting the open entry closes it, selecting any
/// other entry makes it the sole open one.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="faq-q-mark">{"Q."}</span>
                <span class="faq-q-text">{props.question}</span>
                <span class="faq-toggle-icon">{"+"}</span>
            </button>
            <div class="faq-answer">
                <span class="faq-a-mark">{"A."}</span>
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq">
            <div class="section-inner faq-grid">
                <FadeIn direction={FadeDirection::Left} class="faq-intro">
                    <div class="section-number">{"06 — FAQ"}</div>
                    <GoldDivider />
                    <h2 class="section-title">
                        {"よくある"}
                        <br />
                        {"ご質問"}
                    </h2>
                    <p class="section-text">{"ご不明な点がございましたら、お気軽にお問い合わせください。"}</p>
                    <img src={config::SCALES_IMAGE} alt="正義の天秤" class="faq-image" />
                </FadeIn>

                <FadeIn direction={FadeDirection::Right} class="faq-list">
                    {
                        data::FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| {
                            let on_toggle = {
                                let open_index = open_index.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_index.set(toggle_open(*open_index, i));
                                })
                            };
                            html! {
                                <FaqItem
                                    question={entry.question}
                                    answer={entry.answer}
                                    open={*open_index == Some(i)}
                                    {on_toggle}
                                />
                            }
                        }).collect::<Html>()
                    }
                </FadeIn>
            </div>
        </section>
    }
}

/// Whether a category option matches the current form selection. Yew only
/// drives `value` on inputs and textareas, so the select is controlled
/// through `selected` on each option instead.
pub fn category_selected(current: &str, value: &str) -> bool {
    current == value
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let category = use_state(String::new);
    let message = use_state(String::new);
    let submitted = use_state(|| false);

    // Native `required` validation has already passed when this fires.
    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Consultation request acknowledged");
            submitted.set(true);
        })
    };

    html! {
        <section id="contact" class="contact">
            <div class="section-inner contact-grid">
                <FadeIn direction={FadeDirection::Left} class="contact-intro">
                    <div class="section-number">{"07 — CONTACT"}</div>
                    <GoldDivider />
                    <h2 class="section-title">
                        {"無料相談の"}
                        <br />
                        {"お申し込み"}
                    </h2>
                    <p class="section-text">
                        {"初回60分の相談は無料です。お気軽にご連絡ください。秘密は厳守いたします。"}
                    </p>

                    <div class="contact-channels">
                        <div class="contact-channel">
                            <span class="channel-icon">{"📞"}</span>
                            <div>
                                <div class="channel-label">{"電話番号"}</div>
                                <div class="channel-value">{config::PHONE}</div>
                                <div class="channel-note">{"平日 9:00〜18:00 / 緊急は24時間対応"}</div>
                            </div>
                        </div>
                        <div class="contact-channel">
                            <span class="channel-icon">{"✉️"}</span>
                            <div>
                                <div class="channel-label">{"メールアドレス"}</div>
                                <div class="channel-value">{config::EMAIL}</div>
                            </div>
                        </div>
                        <div class="contact-channel">
                            <span class="channel-icon">{"📍"}</span>
                            <div>
                                <div class="channel-label">{"所在地"}</div>
                                <div class="channel-value">{config::POSTAL_CODE}</div>
                                <div class="channel-value">{config::ADDRESS}</div>
                                <div class="channel-note">{config::BUILDING}</div>
                            </div>
                        </div>
                    </div>
                </FadeIn>

                <FadeIn direction={FadeDirection::Right} class="contact-form-wrap">
                    {
                        if *submitted {
                            html! {
                                <div class="form-acknowledgment">
                                    {"お問い合わせを受け付けました。担当者より2営業日以内にご連絡いたします。"}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={onsubmit} class="contact-form">
                        <div class="form-row">
                            <div class="form-field">
                                <label>{"お名前 "}<span class="required-mark">{"*"}</span></label>
                                <input
                                    type="text"
                                    required=true
                                    value={(*name).clone()}
                                    placeholder="山田 太郎"
                                    oninput={let name = name.clone(); move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    }}
                                />
                            </div>
                            <div class="form-field">
                                <label>{"電話番号"}</label>
                                <input
                                    type="tel"
                                    value={(*phone).clone()}
                                    placeholder="03-0000-0000"
                                    oninput={let phone = phone.clone(); move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        phone.set(input.value());
                                    }}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label>{"メールアドレス "}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="email"
                                required=true
                                value={(*email).clone()}
                                placeholder="example@email.com"
                                oninput={let email = email.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field">
                            <label>{"ご相談内容の種別"}</label>
                            <select
                                onchange={let category = category.clone(); move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    category.set(select.value());
                                }}
                            >
                                <option value="" selected={category.is_empty()}>
                                    {"選択してください"}
                                </option>
                                {
                                    data::CONSULTATION_CATEGORIES.iter().map(|(value, label)| {
                                        html! {
                                            <option
                                                value={*value}
                                                selected={category_selected(&category, value)}
                                            >
                                                {*label}
                                            </option>
                                        }
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                        <div class="form-field">
                            <label>{"ご相談内容 "}<span class="required-mark">{"*"}</span></label>
                            <textarea
                                required=true
                                rows="5"
                                value={(*message).clone()}
                                placeholder="ご相談内容をご記入ください。詳しい内容は面談時にお伺いします。"
                                oninput={let message = message.clone(); move |e: InputEvent| {
                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(area.value());
                                }}
                            />
                        </div>
                        <p class="form-note">
                            {"ご入力いただいた個人情報は、ご相談への対応のみに使用し、第三者への提供は一切行いません。"}
                        </p>
                        <button type="submit" class="form-submit">{"無料相談を申し込む"}</button>
                    </form>
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(AccessSection)]
fn access_section() -> Html {
    let routes = [
        "東京メトロ丸ノ内線「大手町駅」A1出口より徒歩2分",
        "東京メトロ千代田線「大手町駅」C3出口より徒歩3分",
        "JR「東京駅」丸の内北口より徒歩8分",
    ];
    let hours = [
        ("平日", "9:00〜18:00"),
        ("土曜日", "10:00〜16:00（要予約）"),
        ("日曜・祝日", "休業（緊急案件は24時間対応）"),
    ];

    html! {
        <section id="access" class="access">
            <div class="section-inner">
                <FadeIn class="section-header">
                    <div class="section-number">{"08 — ACCESS"}</div>
                    <GoldDivider />
                    <h2 class="section-title light">{"アクセス"}</h2>
                </FadeIn>

                <div class="access-grid">
                    <FadeIn direction={FadeDirection::Left}>
                        <div class="access-map">
                            <span class="map-pin">{"📍"}</span>
                            <p>{config::ADDRESS}</p>
                            <p class="map-sub">{config::BUILDING}</p>
                        </div>
                    </FadeIn>

                    <FadeIn direction={FadeDirection::Right}>
                        <div class="access-block">
                            <h3>{"所在地"}</h3>
                            <p>{config::POSTAL_CODE}</p>
                            <p>{config::ADDRESS}</p>
                            <p>{config::BUILDING}</p>
                        </div>
                        <div class="access-block">
                            <h3>{"交通アクセス"}</h3>
                            {
                                routes.iter().map(|route| {
                                    html! { <p class="access-route">{*route}</p> }
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="access-block">
                            <h3>{"営業時間"}</h3>
                            {
                                hours.iter().map(|(day, time)| {
                                    html! {
                                        <div class="access-hours">
                                            <span class="hours-day">{*day}</span>
                                            <span class="hours-time">{*time}</span>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let office_links = [
        ("事務所について", "#about"),
        ("弁護士紹介", "#attorneys"),
        ("解決実績", "#results"),
        ("よくある質問", "#faq"),
        ("アクセス", "#access"),
        ("無料相談", "#contact"),
    ];

    html! {
        <footer class="footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo-en">{config::FIRM_NAME_EN}</div>
                        <div class="footer-logo-jp">{config::FIRM_NAME_JP}</div>
                        <p class="footer-blurb">
                            {"1998年創業。東京都千代田区を拠点に、企業法務から個人の法律問題まで幅広く対応する総合法律事務所です。"}
                        </p>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"業務内容"}</div>
                        <ul>
                            {
                                data::SERVICES.iter().map(|service| {
                                    html! {
                                        <li><a href="#services">{service.title}</a></li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"事務所情報"}</div>
                        <ul>
                            {
                                office_links.iter().map(|(label, href)| {
                                    html! {
                                        <li><a href={*href}>{*label}</a></li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>
                <div class="footer-rule"></div>
                <div class="footer-bottom">
                    <p>{"© 2024 山田・鈴木法律事務所. All rights reserved."}</p>
                    <div class="footer-legal">
                        <a href="#">{"プライバシーポリシー"}</a>
                        <a href="#">{"利用規約"}</a>
                        <a href="#">{"弁護士費用"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <HeroSection />
            <StatsSection />
            <AboutSection />
            <ServicesSection />
            <AttorneysSection />
            <ResultsSection />
            <TestimonialsSection />
            <FaqSection />
            <ContactSection />
            <AccessSection />
            <Footer />

            <style>
                {r#"
:root {
    --navy: #0f1f3d;
    --navy-deep: #080f1e;
    --navy-light: #1a3060;
    --gold: #b8965a;
    --gold-light: #d4a96a;
    --cream: #fdf9f3;
}

body {
    margin: 0;
    font-family: 'Noto Sans JP', sans-serif;
    color: #0f1f3d;
    background: #ffffff;
}

.section-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
}

section {
    padding: 6rem 0;
}

.section-number {
    font-size: 0.8rem;
    letter-spacing: 0.3em;
    color: var(--gold);
    margin-bottom: 1rem;
    text-transform: uppercase;
}

.section-title {
    font-family: 'Noto Serif JP', serif;
    font-size: clamp(1.8rem, 3vw, 2.5rem);
    font-weight: 700;
    color: var(--navy);
    margin: 1.5rem 0;
    line-height: 1.4;
}

.section-title.light {
    color: #ffffff;
}

.section-text {
    color: #666;
    font-size: 0.95rem;
    line-height: 1.9;
    margin-bottom: 1.5rem;
}

.section-lead {
    color: #888;
    font-size: 0.9rem;
    max-width: 24rem;
    line-height: 1.8;
}

.section-lead.light {
    color: rgba(255, 255, 255, 0.5);
}

.section-header {
    margin-bottom: 4rem;
}

.section-header-row {
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    gap: 1rem;
    flex-wrap: wrap;
}

/* Navigation */

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: background 0.5s ease, box-shadow 0.5s ease;
}

.top-nav.scrolled {
    background: rgba(15, 31, 61, 0.95);
    backdrop-filter: blur(8px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    flex-direction: column;
    text-decoration: none;
    line-height: 1.3;
}

.nav-logo-en {
    color: var(--gold);
    font-size: 1.2rem;
    font-weight: 600;
    letter-spacing: 0.1em;
}

.nav-logo-jp {
    color: #ffffff;
    font-size: 0.7rem;
    letter-spacing: 0.3em;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    color: rgba(255, 255, 255, 0.8);
    text-decoration: none;
    font-size: 0.85rem;
    letter-spacing: 0.05em;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: var(--gold);
}

.nav-cta {
    background: var(--gold);
    color: #ffffff;
    text-decoration: none;
    font-size: 0.85rem;
    padding: 0.7rem 1.3rem;
    letter-spacing: 0.1em;
    transition: background 0.3s ease;
}

.nav-cta:hover {
    background: var(--gold-light);
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    background: #ffffff;
}

/* Hero */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    background: var(--navy);
    padding: 0;
}

.hero-bg {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right,
        rgba(15, 31, 61, 0.9),
        rgba(15, 31, 61, 0.7) 50%,
        rgba(15, 31, 61, 0.3));
}

.hero-content {
    position: relative;
    z-index: 10;
    max-width: 1200px;
    margin: 0 auto;
    padding: 7rem 2rem 4rem;
    width: 100%;
    box-sizing: border-box;
}

.hero-eyebrow {
    display: flex;
    align-items: center;
    gap: 0.8rem;
    margin-bottom: 1.5rem;
    animation: fade-slide-up 0.7s ease 0.3s both;
}

.eyebrow-line {
    display: inline-block;
    height: 1px;
    width: 40px;
    background: var(--gold);
}

.eyebrow-text {
    color: var(--gold);
    font-size: 0.85rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
}

.hero-title {
    font-family: 'Noto Serif JP', serif;
    color: #ffffff;
    font-size: clamp(2.2rem, 5vw, 3.8rem);
    font-weight: 700;
    line-height: 1.3;
    margin: 0 0 1.5rem;
    animation: fade-slide-up 0.8s ease 0.5s both;
}

.hero-title .accent {
    color: var(--gold);
}

.hero-subtitle {
    color: rgba(255, 255, 255, 0.7);
    font-style: italic;
    font-size: clamp(1.1rem, 2.5vw, 1.5rem);
    margin-bottom: 1rem;
    animation: fade-slide-up 0.7s ease 0.7s both;
}

.hero-description {
    color: rgba(255, 255, 255, 0.75);
    font-size: 0.95rem;
    line-height: 1.9;
    max-width: 32rem;
    margin-bottom: 2.5rem;
    animation: fade-slide-up 0.7s ease 0.9s both;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
    animation: fade-slide-up 0.7s ease 1.1s both;
}

.hero-button {
    display: inline-block;
    padding: 1rem 2rem;
    font-size: 0.9rem;
    letter-spacing: 0.1em;
    text-decoration: none;
    transition: all 0.3s ease;
}

.hero-button.primary {
    background: var(--gold);
    color: #ffffff;
}

.hero-button.primary:hover {
    background: var(--gold-light);
    transform: translateY(-2px);
}

.hero-button.secondary {
    border: 1px solid rgba(255, 255, 255, 0.4);
    color: #ffffff;
}

.hero-button.secondary:hover {
    border-color: var(--gold);
    color: var(--gold);
}

.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    text-align: center;
    color: rgba(255, 255, 255, 0.5);
    font-size: 0.7rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    animation: fade-slide-up 0.7s ease 1.5s both;
}

.scroll-chevron {
    color: var(--gold);
    font-size: 1.3rem;
    animation: bounce 1.5s infinite;
}

@keyframes fade-slide-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(8px); }
}

/* Entrance effect */

.fade-in {
    opacity: 0;
    transition: opacity 0.7s ease, transform 0.7s ease;
}

.fade-in.fade-up { transform: translateY(40px); }
.fade-in.fade-left { transform: translateX(-50px); }
.fade-in.fade-right { transform: translateX(50px); }
.fade-in.fade-none { transform: none; }

.fade-in.visible {
    opacity: 1;
    transform: none;
}

/* Gold divider */

.gold-divider {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.gold-divider-line {
    display: inline-block;
    height: 1px;
    background: var(--gold);
}

.gold-divider-line.long { width: 48px; }
.gold-divider-line.short { width: 24px; }

.gold-divider-dot {
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--gold);
}

/* Stats */

.stats {
    background: var(--navy);
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding: 4rem 0;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.stat-cell {
    text-align: center;
    border-right: 1px solid rgba(255, 255, 255, 0.1);
}

.stat-cell:last-child {
    border-right: none;
}

.stat-value {
    color: var(--gold);
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 600;
}

.stat-unit {
    font-size: 1.1rem;
    margin-left: 0.3rem;
}

.stat-label {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.85rem;
    letter-spacing: 0.05em;
    margin-top: 0.3rem;
}

/* About */

.about {
    background: var(--cream);
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 5rem;
    align-items: center;
}

.about-visual {
    position: relative;
}

.about-image {
    width: 100%;
    height: 480px;
    object-fit: cover;
}

.about-card {
    position: absolute;
    bottom: -2rem;
    right: -2rem;
    background: var(--navy);
    color: #ffffff;
    padding: 1.5rem;
    width: 180px;
}

.about-card-year {
    color: var(--gold);
    font-size: 1.8rem;
    font-weight: 600;
}

.about-card-label {
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.75rem;
    letter-spacing: 0.1em;
    margin-top: 0.3rem;
}

.about-card-rule {
    height: 1px;
    width: 32px;
    background: var(--gold);
    margin: 0.8rem 0 0.5rem;
}

.about-card-place {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.75rem;
}

.about-highlights {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    margin-bottom: 2rem;
}

.about-highlight {
    display: flex;
    align-items: center;
    gap: 0.8rem;
    font-size: 0.9rem;
}

.highlight-icon {
    width: 32px;
    height: 32px;
    background: rgba(184, 150, 90, 0.1);
    display: inline-flex;
    align-items: center;
    justify-content: center;
}

.text-link {
    color: var(--gold);
    text-decoration: none;
    font-size: 0.9rem;
    letter-spacing: 0.1em;
    border-bottom: 1px solid var(--gold);
    padding-bottom: 0.25rem;
}

/* Services */

.services {
    background: #ffffff;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1px;
    background: #f0f0f0;
}

.service-card {
    background: #ffffff;
    padding: 2rem;
    height: 100%;
    box-sizing: border-box;
    transition: background 0.5s ease;
}

.service-card:hover {
    background: var(--navy);
}

.service-card:hover .service-title,
.service-card:hover .service-description,
.service-card:hover .service-items li {
    color: rgba(255, 255, 255, 0.8);
}

.service-icon {
    width: 48px;
    height: 48px;
    background: rgba(184, 150, 90, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.3rem;
    margin-bottom: 1.5rem;
}

.service-title {
    font-family: 'Noto Serif JP', serif;
    font-size: 1.1rem;
    font-weight: 600;
    margin-bottom: 0.8rem;
    transition: color 0.5s ease;
}

.service-description {
    color: #888;
    font-size: 0.85rem;
    line-height: 1.8;
    margin-bottom: 1.2rem;
    transition: color 0.5s ease;
}

.service-items {
    list-style: none;
    padding: 0;
    margin: 0;
}

.service-items li {
    color: #aaa;
    font-size: 0.78rem;
    padding: 0.25rem 0 0.25rem 1rem;
    position: relative;
    transition: color 0.5s ease;
}

.service-items li::before {
    content: '';
    position: absolute;
    left: 0;
    top: 50%;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--gold);
}

/* Attorneys */

.attorneys {
    background: var(--cream);
}

.attorney-row {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 2.5rem;
    align-items: start;
}

.attorney-row.reverse {
    direction: rtl;
}

.attorney-row.reverse > * {
    direction: ltr;
}

.attorney-photo {
    position: relative;
    background: var(--navy);
    aspect-ratio: 4 / 5;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.attorney-photo-number {
    position: absolute;
    top: 1rem;
    left: 1rem;
    color: rgba(255, 255, 255, 0.1);
    font-size: 6rem;
    font-weight: 700;
    line-height: 1;
}

.attorney-photo-name {
    text-align: center;
}

.photo-name-jp {
    color: #ffffff;
    font-family: 'Noto Serif JP', serif;
    font-size: 1.1rem;
    font-weight: 600;
}

.photo-name-en {
    color: var(--gold);
    font-style: italic;
    font-size: 0.85rem;
    margin-top: 0.3rem;
}

.attorney-badge {
    display: inline-block;
    color: var(--gold);
    background: rgba(184, 150, 90, 0.1);
    font-size: 0.75rem;
    letter-spacing: 0.1em;
    padding: 0.3rem 0.8rem;
    margin-bottom: 0.8rem;
}

.attorney-name {
    font-family: 'Noto Serif JP', serif;
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 0 0.2rem;
}

.attorney-name-en {
    color: #aaa;
    font-style: italic;
    margin-bottom: 1.2rem;
}

.attorney-bio {
    color: #666;
    font-size: 0.9rem;
    line-height: 1.9;
    margin-bottom: 1.5rem;
}

.attorney-details {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

.detail-label {
    color: var(--gold);
    font-size: 0.72rem;
    letter-spacing: 0.1em;
    margin-bottom: 0.3rem;
}

.detail-value {
    color: #444;
    font-size: 0.82rem;
}

.detail-sub {
    color: #999;
    font-size: 0.75rem;
}

.detail-award {
    color: #666;
    font-size: 0.78rem;
}

.attorney-rule {
    height: 1px;
    background: #e0e0e0;
    margin: 3rem 0;
}

/* Results */

.results {
    background: var(--navy);
}

.results-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.result-card {
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 2rem;
    height: 100%;
    box-sizing: border-box;
    transition: border-color 0.5s ease;
}

.result-card:hover {
    border-color: rgba(184, 150, 90, 0.5);
}

.result-card-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.result-category {
    color: var(--gold);
    background: rgba(184, 150, 90, 0.1);
    font-size: 0.75rem;
    letter-spacing: 0.1em;
    padding: 0.3rem 0.8rem;
}

.result-outcome {
    color: #6ee7a0;
    border: 1px solid rgba(110, 231, 160, 0.3);
    font-size: 0.75rem;
    letter-spacing: 0.1em;
    padding: 0.3rem 0.8rem;
}

.result-title {
    font-family: 'Noto Serif JP', serif;
    color: #ffffff;
    font-size: 1.1rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.result-amount {
    color: var(--gold);
    font-style: italic;
    font-size: 1.2rem;
    margin-bottom: 1rem;
}

.result-description {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.85rem;
    line-height: 1.8;
}

/* Testimonials */

.testimonials {
    background: #ffffff;
}

.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.testimonial-card {
    position: relative;
    background: var(--cream);
    border-left: 2px solid var(--gold);
    padding: 2rem;
    height: 100%;
    box-sizing: border-box;
}

.testimonial-mark {
    position: absolute;
    top: 0.5rem;
    left: 1.2rem;
    color: rgba(184, 150, 90, 0.3);
    font-size: 5rem;
    line-height: 1;
}

.testimonial-quote {
    position: relative;
    color: #666;
    font-size: 0.88rem;
    line-height: 1.9;
    padding-top: 1rem;
    margin-bottom: 1.5rem;
}

.testimonial-initials {
    font-family: 'Noto Serif JP', serif;
    font-weight: 600;
    font-size: 0.9rem;
}

.testimonial-detail {
    color: #aaa;
    font-size: 0.78rem;
}

.testimonial-stars {
    color: var(--gold);
    font-size: 0.8rem;
    letter-spacing: 0.2em;
    margin-top: 1rem;
}

/* FAQ */

.faq {
    background: var(--cream);
}

.faq-grid {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 4rem;
}

.faq-image {
    width: 100%;
    max-width: 280px;
    opacity: 0.8;
    margin-top: 1rem;
}

.faq-list {
    border-top: 1px solid #e0e0e0;
}

.faq-item {
    border-bottom: 1px solid #e0e0e0;
    padding: 1.2rem 0;
}

.faq-question {
    width: 100%;
    display: flex;
    align-items: flex-start;
    gap: 0.8rem;
    background: none;
    border: none;
    cursor: pointer;
    text-align: left;
    padding: 0;
    font-family: inherit;
}

.faq-q-mark {
    color: var(--gold);
    font-weight: 600;
    font-size: 1.1rem;
    flex-shrink: 0;
}

.faq-q-text {
    flex: 1;
    font-family: 'Noto Serif JP', serif;
    color: var(--navy);
    font-size: 0.92rem;
    line-height: 1.7;
    transition: color 0.3s ease;
}

.faq-question:hover .faq-q-text {
    color: var(--gold);
}

.faq-toggle-icon {
    flex-shrink: 0;
    width: 20px;
    height: 20px;
    border: 1px solid var(--gold);
    color: var(--gold);
    font-weight: 300;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    transition: transform 0.2s ease;
}

.faq-item.open .faq-toggle-icon {
    transform: rotate(45deg);
}

.faq-answer {
    display: flex;
    gap: 0.8rem;
    max-height: 0;
    opacity: 0;
    overflow: hidden;
    transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
    padding: 0 1.8rem 0 0;
}

.faq-item.open .faq-answer {
    max-height: 400px;
    opacity: 1;
    padding-top: 0.8rem;
}

.faq-a-mark {
    color: #aaa;
    font-weight: 600;
    font-size: 1.1rem;
    flex-shrink: 0;
}

.faq-answer p {
    color: #666;
    font-size: 0.88rem;
    line-height: 1.9;
    margin: 0;
}

/* Contact */

.contact {
    background: #ffffff;
}

.contact-grid {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 4rem;
}

.contact-channels {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    margin-top: 2rem;
}

.contact-channel {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}

.channel-icon {
    width: 40px;
    height: 40px;
    background: var(--navy);
    display: inline-flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}

.channel-label {
    color: var(--gold);
    font-size: 0.72rem;
    letter-spacing: 0.1em;
    margin-bottom: 0.3rem;
}

.channel-value {
    color: var(--navy);
    font-size: 0.95rem;
}

.channel-note {
    color: #aaa;
    font-size: 0.75rem;
    margin-top: 0.2rem;
}

.form-acknowledgment {
    background: rgba(110, 200, 140, 0.1);
    border: 1px solid rgba(110, 200, 140, 0.4);
    color: #2e7d4f;
    font-size: 0.9rem;
    padding: 1rem 1.2rem;
    margin-bottom: 1.5rem;
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.2rem;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.2rem;
}

.form-field label {
    display: block;
    color: var(--navy);
    font-size: 0.78rem;
    letter-spacing: 0.1em;
    margin-bottom: 0.5rem;
}

.required-mark {
    color: var(--gold);
}

.form-field input,
.form-field select,
.form-field textarea {
    width: 100%;
    box-sizing: border-box;
    border: 1px solid #e0e0e0;
    padding: 0.8rem 1rem;
    font-family: inherit;
    font-size: 0.88rem;
    color: #444;
    background: #ffffff;
    outline: none;
    transition: border-color 0.3s ease;
    resize: none;
}

.form-field input:focus,
.form-field select:focus,
.form-field textarea:focus {
    border-color: var(--gold);
}

.form-note {
    color: #aaa;
    font-size: 0.75rem;
    line-height: 1.7;
    margin: 0;
}

.form-submit {
    background: var(--navy);
    color: #ffffff;
    border: none;
    cursor: pointer;
    font-family: inherit;
    font-size: 0.9rem;
    letter-spacing: 0.1em;
    padding: 1.1rem;
    transition: background 0.3s ease;
}

.form-submit:hover {
    background: var(--navy-light);
}

/* Access */

.access {
    background: var(--navy);
}

.access-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: start;
}

.access-map {
    background: var(--navy-light);
    border: 1px solid rgba(255, 255, 255, 0.1);
    aspect-ratio: 16 / 9;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.map-pin {
    font-size: 2rem;
    margin-bottom: 0.8rem;
}

.access-map p {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.88rem;
    margin: 0.2rem 0;
}

.access-map .map-sub {
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.78rem;
}

.access-block {
    margin-bottom: 2rem;
}

.access-block h3 {
    font-family: 'Noto Serif JP', serif;
    color: var(--gold);
    font-size: 1rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.access-block p {
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.88rem;
    margin: 0.2rem 0;
}

.access-route {
    position: relative;
    padding-left: 1rem;
}

.access-route::before {
    content: '';
    position: absolute;
    left: 0;
    top: 0.6em;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--gold);
}

.access-hours {
    display: flex;
    gap: 1.5rem;
    margin: 0.3rem 0;
}

.hours-day {
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.85rem;
    width: 5.5rem;
    flex-shrink: 0;
}

.hours-time {
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.85rem;
}

/* Footer */

.footer {
    background: var(--navy-deep);
    color: rgba(255, 255, 255, 0.6);
    padding: 3rem 0;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.footer-grid {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 2rem;
    margin-bottom: 2.5rem;
}

.footer-logo-en {
    color: var(--gold);
    font-size: 1.1rem;
    font-weight: 600;
    letter-spacing: 0.1em;
}

.footer-logo-jp {
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.72rem;
    letter-spacing: 0.3em;
    margin: 0.3rem 0 1rem;
}

.footer-blurb {
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.78rem;
    line-height: 1.8;
    max-width: 20rem;
}

.footer-heading {
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.78rem;
    letter-spacing: 0.1em;
    margin-bottom: 1rem;
}

.footer-column ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer-column li {
    margin-bottom: 0.5rem;
}

.footer-column a {
    color: rgba(255, 255, 255, 0.4);
    text-decoration: none;
    font-size: 0.78rem;
    transition: color 0.3s ease;
}

.footer-column a:hover {
    color: var(--gold);
}

.footer-rule {
    height: 1px;
    background: rgba(255, 255, 255, 0.05);
    margin-bottom: 1.5rem;
}

.footer-bottom {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    flex-wrap: wrap;
}

.footer-bottom p {
    color: rgba(255, 255, 255, 0.3);
    font-size: 0.75rem;
    margin: 0;
}

.footer-legal {
    display: flex;
    gap: 1.5rem;
}

.footer-legal a {
    color: rgba(255, 255, 255, 0.3);
    text-decoration: none;
    font-size: 0.75rem;
    transition: color 0.3s ease;
}

.footer-legal a:hover {
    color: var(--gold);
}

/* Responsive */

@media (max-width: 960px) {
    .nav-right {
        position: absolute;
        top: 80px;
        left: 0;
        right: 0;
        background: var(--navy);
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        flex-direction: column;
        align-items: stretch;
        gap: 0;
        padding: 1rem 2rem;
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
    }

    .nav-link {
        padding: 0.8rem 0;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }

    .nav-cta {
        text-align: center;
        margin-top: 1rem;
    }

    .burger-menu {
        display: flex;
    }

    .stats-grid {
        grid-template-columns: 1fr 1fr;
    }

    .stat-cell {
        border-right: none;
    }

    .about-grid,
    .faq-grid,
    .contact-grid,
    .access-grid,
    .results-grid {
        grid-template-columns: 1fr;
    }

    .about-card {
        display: none;
    }

    .services-grid,
    .testimonials-grid {
        grid-template-columns: 1fr;
    }

    .attorney-row {
        grid-template-columns: 1fr;
    }

    .footer-grid {
        grid-template-columns: 1fr;
    }

    .form-row {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{category_selected, toggle_open};
    use crate::data;

    #[test]
    fn selecting_a_closed_entry_opens_only_that_entry() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(0), 2), Some(2));
    }

    #[test]
    fn selecting_the_open_entry_closes_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }

    #[test]
    fn a_chosen_category_selects_exactly_one_option() {
        let matching = data::CONSULTATION_CATEGORIES
            .iter()
            .filter(|(value, _)| category_selected("criminal", value))
            .count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn an_empty_category_selects_no_listed_option() {
        assert!(data::CONSULTATION_CATEGORIES
            .iter()
            .all(|(value, _)| !category_selected("", value)));
    }

    #[test]
    fn at_most_one_entry_is_ever_open() {
        let mut open = None;
        for clicked in [0usize, 1, 1, 4, 2, 2, 0] {
            open = toggle_open(open, clicked);
            if let Some(i) = open {
                assert_eq!(i, clicked);
            }
        }
    }
}
