use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::reveal::Reveal;

const QUESTIONS: [(&str, &str); 6] = [
    (
        "Posso começar em qualquer dia do ano?",
        "Sim! O Devocional 365 foi criado para que você comece quando quiser. Não importa se estamos em janeiro ou em setembro — abra na página do dia e comece. Cada dia é independente e completo.",
    ),
    (
        "Funciona se eu já estiver atrasado?",
        "Com certeza. O devocional não segue um calendário rígido. Se você começou e parou, ou se está começando agora no meio do ano, simplesmente abra no dia atual e siga em frente. Os guias mensais de recomeço vão te ajudar nesse processo.",
    ),
    (
        "Posso imprimir o devocional?",
        "Sim! O arquivo foi preparado no formato A4, ideal para impressão. Você pode imprimir tudo de uma vez ou mês a mês, do jeito que preferir. Também funciona perfeitamente em formato digital.",
    ),
    (
        "O devocional é digital?",
        "Sim, o Devocional 365 é um produto digital. Você recebe o acesso ao arquivo completo imediatamente após a compra. Pode usar no celular, tablet ou computador, ou imprimir em papel A4.",
    ),
    (
        "Preciso ter conhecimento bíblico para usar?",
        "Não! O devocional usa uma linguagem simples, acolhedora e sem termos religiosos complexos. Foi feito para qualquer pessoa que deseja se aproximar de Deus, independente do nível de conhecimento bíblico.",
    ),
    (
        "E se eu não gostar?",
        "Você tem 7 dias de garantia. Se por qualquer motivo o devocional não atender às suas expectativas, é só entrar em contato e devolvemos o valor integral. Sem complicação.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section faq-section">
            <div class="container narrow">
                <Reveal>
                    <div class="section-head">
                        <p class="kicker">{"Tire suas dúvidas"}</p>
                        <h2>{"Perguntas frequentes"}</h2>
                    </div>
                </Reveal>
                <Reveal delay_ms={100}>
                    <div class="faq-card">
                        { for QUESTIONS.iter().map(|(question, answer)| html! {
                            <FaqItem key={*question} question={*question} answer={*answer} />
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
