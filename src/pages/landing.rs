use chrono::Datelike;
use yew::prelude::*;

use crate::components::cta::{CtaButton, FloatingCta};
use crate::components::month_preview::MonthPreview;
use crate::components::reveal::Reveal;
use crate::components::star_rating::StarRating;
use crate::components::typewriter::TypingDemo;
use crate::config;
use crate::devotional::months::MONTHS;
use crate::pages::faq::Faq;

const BENEFITS: [(&str, &str, &str); 6] = [
    ("📅", "365 dias organizados", "Cada dia do ano tem sua página, com oração, versículo, reflexão e espaço para suas anotações pessoais."),
    ("📄", "Um dia por página", "Sem excesso de conteúdo. Cada página é leve, objetiva e feita para caber na sua rotina — mesmo nos dias corridos."),
    ("🖨️", "Digital ou impresso", "Use no tablet, celular ou computador. Ou imprima em A4 e monte seu próprio caderno devocional físico."),
    ("✏️", "Espaço para escrita", "Cada dia tem linhas para suas anotações, orações e pensamentos. Seu devocional, do seu jeito."),
    ("☕", "Linguagem simples", "Sem termos religiosos complexos. Textos acolhedores que qualquer pessoa consegue ler e se conectar."),
    ("🔄", "Guias de recomeço", "Perdeu dias ou semanas? Cada mês tem um guia que ajuda você a retomar sem culpa e sem pressão."),
];

const STEPS: [(&str, &str, &str); 4] = [
    ("🎁", "Adquira o devocional", "Faça seu pedido e receba o acesso completo ao Devocional 365 imediatamente."),
    ("⬇️", "Receba o acesso", "O arquivo completo é enviado para você de forma digital, pronto para usar."),
    ("🖨️", "Escolha o formato", "Use digitalmente no tablet ou celular, ou imprima em A4 para criar seu caderno."),
    ("☀️", "Comece quando quiser", "Não importa o mês ou o dia. Abra na página de hoje e comece sua jornada."),
];

const AUDIENCE: [(&str, &str); 8] = [
    ("🕒", "Para quem quer criar um hábito diário com Deus, mesmo com pouco tempo"),
    ("🔄", "Para quem já tentou manter um devocional e parou — mais de uma vez"),
    ("🌸", "Para quem busca paz, direção e um momento de silêncio na rotina"),
    ("🪶", "Para quem deseja uma fé prática, leve e sem complicação"),
    ("♡", "Para quem quer se sentir mais perto de Deus, todos os dias"),
    ("👥", "Para quem quer compartilhar esse momento com a família ou amigos"),
    ("📖", "Para quem gosta de escrever, refletir e guardar suas experiências"),
    ("⭐", "Para quem acredita que nunca é tarde para começar de novo"),
];

struct Testimonial {
    name: &'static str,
    photo: &'static str,
    stars: u8,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Maria Santos",
        photo: "https://randomuser.me/api/portraits/women/44.jpg",
        stars: 5,
        quote: "O devocional mudou minha rotina matinal. A linguagem é tão acolhedora que parece que foi escrito para mim. Cada página traz paz.",
    },
    Testimonial {
        name: "Ana Paula R.",
        photo: "https://randomuser.me/api/portraits/women/32.jpg",
        stars: 5,
        quote: "Comecei em julho, achando que era tarde. Mas o devocional me acolheu sem julgamento. Os guias de recomeço são incríveis.",
    },
    Testimonial {
        name: "Carlos Eduardo",
        photo: "https://randomuser.me/api/portraits/men/32.jpg",
        stars: 4,
        quote: "Material bem feito e organizado. Imprimi em A4 e ficou lindo, parece um livro profissional. Superou minhas expectativas.",
    },
    Testimonial {
        name: "Juliana Ferreira",
        photo: "https://randomuser.me/api/portraits/women/63.jpg",
        stars: 5,
        quote: "Presenteei minha mãe e ela amou! Agora fazemos juntas, cada uma no seu tempo. Virou nosso momento especial.",
    },
];

const MISSED_DAYS: [&str; 5] = [
    "Não há penalidade por dias perdidos",
    "Cada mês traz um guia de recomeço para te ajudar a retomar",
    "Você pode pular, voltar e seguir no seu ritmo",
    "As datas são sugestões, não obrigações",
    "O importante é estar presente quando puder — não ser perfeito",
];

const INCLUDED: [(&str, &str, &str); 6] = [
    ("📖", "Devocional 365 completo", "365 páginas com oração, versículo, reflexão e espaço para anotações"),
    ("🔖", "Introduções mensais", "Cada mês começa com uma palavra de acolhimento e direcionamento"),
    ("🔄", "Guias de recuperação", "Perdeu dias? Cada mês tem um guia especial para te ajudar a recomeçar"),
    ("🪶", "Páginas extras de reflexão", "Espaços dedicados para reflexões mais profundas e momentos especiais"),
    ("📄", "Orientações de uso", "Instruções claras para uso digital ou impressão em A4"),
    ("♡", "Feito com cuidado", "Cada palavra foi escrita pensando em você e na sua jornada de fé"),
];

const OFFER_ITEMS: [&str; 5] = [
    "365 dias de devocional completo",
    "Guias de recomeço mensais",
    "Páginas extras de reflexão",
    "Uso digital ou impressão A4",
    "Acesso imediato ao arquivo",
];

const SUPPORT_ITEMS: [&str; 3] = [
    "Recebe um conteúdo feito com profundidade e responsabilidade",
    "Apoia a continuidade e melhoria do projeto",
    "Contribui para que novas versões e recursos sejam desenvolvidos",
];

#[function_component(Hero)]
fn hero() -> Html {
    let sample = &MONTHS[0];
    let day = &sample.sample_day;

    html! {
        <header class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="badge">{"✦ Devocional 365 — Um dia de cada vez com Deus"}</div>
                    <h1>
                        {"Você não precisa começar no "}
                        <span class="highlight-text">{"dia 1"}</span>
                        {" para caminhar com Deus"}
                    </h1>
                    <p class="hero-subtitle">
                        {"O Devocional 365 foi criado para pessoas reais, que querem "}
                        <strong>{"constância sem culpa."}</strong>
                    </p>
                    <CtaButton text="Começar hoje com Deus" large=true />
                    <div class="trust-row">
                        <span>{"⬇️ Acesso imediato"}</span>
                        <span>{"🛡️ Garantia 7 dias"}</span>
                        <span>{"🖨️ Digital ou impresso"}</span>
                    </div>
                </div>

                <div class="hero-mockup float-animation">
                    <div class="tablet">
                        <div class="tablet-page notebook-bg">
                            <div class="margin-line"></div>
                            <div class="mockup-head">
                                <div>
                                    <p class="page-brand">{"✦ Devocional 365 ✦"}</p>
                                    <h3>{format!("Dia {}", day.year_day)}</h3>
                                </div>
                                <div class="mockup-date">
                                    <p>{sample.name}</p>
                                    <p class="mockup-day">{day.day_number.to_string()}</p>
                                </div>
                            </div>
                            <p class="mockup-label">{"Oração"}</p>
                            <p class="mockup-prayer">{day.prayer}</p>
                            <p class="mockup-label">{"Versículo"}</p>
                            <p class="mockup-verse">{format!("“{}”", day.verse)}</p>
                            <p class="verse-ref">{format!("— {}", day.verse_ref)}</p>
                            <p class="mockup-label">{"Anotações"}</p>
                            <p class="mockup-note">{"Gratidão pela manhã tranquila..."}</p>
                            <p class="mockup-note faded">{"Lembrar de orar pela família"}</p>
                            <p class="mockup-page">{format!("— {} —", day.year_day)}</p>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Identification)]
fn identification() -> Html {
    html! {
        <section class="section identification">
            <div class="container narrow centered">
                <Reveal>
                    <p class="eyebrow warm">{"♡ Você se identifica?"}</p>
                    <p class="display-lg">
                        {"Você começou um devocional cheio de vontade..."}<br />
                        <em class="accent">{"...e parou no dia 12."}</em>
                    </p>
                    <p class="lead">{"Não por falta de fé. Não por falta de desejo."}<br />{"Mas porque a vida aconteceu."}</p>
                    <div class="quiet-list">
                        <p>{"Os dias passaram."}</p>
                        <p>{"A culpa chegou."}</p>
                        <p>{"E aquele caderno ficou esquecido na gaveta."}</p>
                    </div>
                    <p class="display-md">
                        {"Você olha para trás e pensa:"}<br />
                        <em>{"“Já perdi tanto tempo... será que ainda dá?”"}</em>
                    </p>
                    <p class="display-lg accent">{"Sim. Ainda dá."}</p>
                    <p class="lead">{"E o Devocional 365 foi feito exatamente para esse recomeço."}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ProductIntro)]
fn product_intro() -> Html {
    html! {
        <section class="section tinted">
            <div class="container">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"Muito prazer,"}</p>
                        <h2>{"Conheça o "}<span class="highlight-text">{"Devocional 365"}</span></h2>
                        <p class="section-sub">
                            {"Um devocional diário com 365 dias organizados, pensado para ser simples, acolhedor e possível de manter — mesmo que você comece hoje."}
                        </p>
                    </div>
                </Reveal>
                <div class="card-grid three">
                    { for BENEFITS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <Reveal key={*title} delay_ms={i as u32 * 100}>
                            <div class="benefit-card">
                                <div class="icon-tile">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TypingSection)]
fn typing_section() -> Html {
    html! {
        <section class="section soft-gradient">
            <div class="container medium">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"✦ Uma experiência real ✦"}</p>
                        <h2>{"Cada dia é um encontro com Deus"}</h2>
                        <p class="section-sub">{"Veja como é a experiência de abrir o devocional e encontrar palavras que acolhem sua alma."}</p>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <TypingDemo />
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Steps)]
fn steps() -> Html {
    html! {
        <section class="section tinted">
            <div class="container">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"Simples assim"}</p>
                        <h2>{"Como um dia com Deus começa"}</h2>
                    </div>
                </Reveal>
                <div class="card-grid four">
                    { for STEPS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <Reveal key={*title} delay_ms={i as u32 * 100}>
                            <div class="step-card">
                                <div class="step-icon">{*icon}</div>
                                <div class="step-number">{(i + 1).to_string()}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PreviewSection)]
fn preview_section() -> Html {
    html! {
        <section class="section notebook-section">
            <div class="container wide">
                <Reveal>
                    <div class="section-head">
                        <div class="badge">{"📖 Prévia exclusiva"}</div>
                        <h2>{"Veja um exemplo de como é "}<span class="highlight-text">{"por dentro"}</span></h2>
                        <p class="section-sub">
                            {"Navegue entre os meses e experimente a sensação de ter o devocional em suas mãos."}
                            <br />
                            <span class="hand accent">{"Isso não é apenas um arquivo. É uma experiência."}</span>
                        </p>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <MonthPreview />
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Audience)]
fn audience() -> Html {
    html! {
        <section class="section tinted">
            <div class="container medium">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"Será que é para mim?"}</p>
                        <h2>{"Para quem é o Devocional 365"}</h2>
                    </div>
                </Reveal>
                <div class="card-grid two">
                    { for AUDIENCE.iter().enumerate().map(|(i, (icon, text))| html! {
                        <Reveal key={i} delay_ms={i as u32 * 80}>
                            <div class="audience-item">
                                <div class="icon-tile small">{*icon}</div>
                                <p>{*text}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section soft-gradient">
            <div class="container medium">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"O que estão dizendo"}</p>
                        <h2>{"Quem já começou, "}<span class="highlight-text">{"recomenda"}</span></h2>
                    </div>
                </Reveal>
                <div class="card-grid two">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={t.name} delay_ms={i as u32 * 100}>
                            <div class="review-card">
                                <div class="review-head">
                                    <img src={t.photo} alt={t.name} loading="lazy" />
                                    <div>
                                        <p class="review-name">{t.name}</p>
                                        <StarRating count={t.stars} small=true />
                                    </div>
                                </div>
                                <p class="review-quote">{format!("“{}”", t.quote)}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal delay_ms={400}>
                    <div class="social-proof">
                        <span><span class="star filled">{"★"}</span><strong>{" 4.8 de 5"}</strong>{" · avaliação média"}</span>
                        <span class="divider"></span>
                        <span>{"👥 +200 pessoas já começaram"}</span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(MissedDays)]
fn missed_days() -> Html {
    html! {
        <section class="section sage-fade">
            <div class="container narrow centered">
                <Reveal>
                    <p class="eyebrow">{"🔄 Uma pergunta importante"}</p>
                    <h2>{"E se eu perder alguns dias?"}</h2>
                    <div class="paper-card">
                        <p class="lead"><span class="hand accent">{"Tudo bem."}</span>{" De verdade."}</p>
                        <p>{"O Devocional 365 não foi feito para gerar culpa. Ele foi pensado para acolher seus recomeços — quantos forem necessários."}</p>
                        <ul class="check-list">
                            { for MISSED_DAYS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                        </ul>
                        <p class="hand accent closing">{"“Deus não conta seus tropeços. Ele celebra seus retornos.”"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Included)]
fn included() -> Html {
    html! {
        <section class="section tinted">
            <div class="container medium">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"Tudo isso está incluso"}</p>
                        <h2>{"O que você recebe"}</h2>
                    </div>
                </Reveal>
                <Reveal delay_ms={100}>
                    <div class="paper-card included">
                        { for INCLUDED.iter().map(|(icon, title, description)| html! {
                            <div key={*title} class="included-row">
                                <div class="icon-tile">{*icon}</div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*description}</p>
                                </div>
                                <span class="check">{"✓"}</span>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Offer)]
fn offer() -> Html {
    html! {
        <section id="oferta" class="section offer">
            <div class="container slim">
                <Reveal>
                    <div class="offer-card">
                        <div class="badge">{"✦ Oferta especial"}</div>
                        <h2>{"Devocional 365"}</h2>
                        <p class="hand accent">{"Um dia de cada vez com Deus"}</p>
                        <div class="price">
                            <p class="price-lead">{"por apenas"}</p>
                            <p class="price-value">
                                <span class="currency">{"R$"}</span>
                                <span class="amount">{"29"}</span>
                                <span class="cents">{",90"}</span>
                            </p>
                            <p class="price-note">{"Pagamento único · Acesso vitalício"}</p>
                        </div>
                        <ul class="check-list">
                            { for OFFER_ITEMS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                        </ul>
                        <CtaButton text="Quero começar hoje" large=true href={config::get_checkout_url()} />
                        <p class="guarantee">{"🛡️ Garantia de satisfação de "}<strong>{"7 dias"}</strong></p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(WhyPaid)]
fn why_paid() -> Html {
    html! {
        <section class="section">
            <div class="container narrow">
                <Reveal>
                    <div class="paper-card paper-lines">
                        <h3>{"Por que este devocional é pago?"}</h3>
                        <p>{"O Devocional 365 "}<strong>{"não é apenas um arquivo."}</strong></p>
                        <p>{"Ele foi planejado, escrito e organizado com cuidado, dedicação e responsabilidade para acompanhar você todos os dias do ano."}</p>
                        <p>
                            {"Cada mês, cada reflexão e cada guia de recomeço foi desenvolvido pensando em "}
                            <strong>{"pessoas reais"}</strong>
                            {" que desejam constância sem culpa."}
                        </p>
                        <p class="list-title">{"Ao adquirir este material, você:"}</p>
                        <ul class="dot-list">
                            { for SUPPORT_ITEMS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                        </ul>
                        <p>
                            {"Esse valor não é apenas pelo acesso ao conteúdo,"}<br />
                            {"mas pelo "}<strong>{"trabalho, pelo tempo investido e pela missão"}</strong>{" de torná-lo cada vez melhor."}
                        </p>
                        <p class="hand accent closing">{"Obrigado por fazer parte disso. 💚"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="section sage-fade">
            <div class="container medium centered">
                <Reveal>
                    <p class="heart">{"♡"}</p>
                    <h2 class="display-xl">
                        {"Não espere a segunda-feira,"}<br />
                        {"o mês que vem ou o próximo ano."}
                    </h2>
                    <p class="lead">
                        {"Hoje ainda é tempo. E Deus está esperando por esse momento com você — não um momento perfeito, mas um momento "}
                        <span class="hand accent">{"verdadeiro."}</span>
                    </p>
                    <CtaButton text="Começar hoje com Deus" large=true />
                    <div class="trust-row centered">
                        <span>{"⬇️ Acesso imediato"}</span>
                        <span>{"🛡️ Garantia 7 dias"}</span>
                        <span>{"♡ Feito com amor"}</span>
                    </div>
                    <p class="hand accent closing">{"Um dia de cada vez. Com Deus. Com você. 🌿"}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p class="hand">{"Devocional 365"}</p>
            <p class="footer-motto">{"Um dia de cada vez com Deus"}</p>
            <div class="footer-legal">
                <p>{format!("© {} Devocional 365. Todos os direitos reservados.", year)}</p>
                <p>{"Feito com 💚 e muita oração."}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on first mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <FloatingCta />
            <Hero />
            <Identification />
            <ProductIntro />
            <TypingSection />
            <Steps />
            <PreviewSection />
            <Audience />
            <Testimonials />
            <MissedDays />
            <Included />
            <Offer />
            <WhyPaid />
            <Faq />
            <FinalCta />
            <Footer />
        </div>
    }
}
