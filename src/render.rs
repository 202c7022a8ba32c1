//! Server-side rendering of components to a string, for asserting on markup.

use yew::{BaseComponent, LocalServerRenderer};

pub async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    tokio::task::LocalSet::new()
        .run_until(
            LocalServerRenderer::<C>::with_props(props)
                .hydratable(false)
                .render(),
        )
        .await
}
