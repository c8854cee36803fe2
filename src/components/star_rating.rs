use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub count: u8,
    #[prop_or_default]
    pub small: bool,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class={classes!("stars", props.small.then(|| "small"))}>
            { for (0..5u8).map(|i| html! {
                <span key={i} class={classes!("star", (i < props.count).then(|| "filled"))}>{"★"}</span>
            }) }
        </div>
    }
}
