use yew::prelude::*;

use crate::components::header::Header;
use crate::components::mailto::MailtoLink;
use crate::components::reveal::use_reveal_on_scroll;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="info-card">
            <h3 class="info-card__title">{props.title.to_string()}</h3>
            <div class="info-card__body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(EarlyAccessEnded)]
pub fn early_access_ended() -> Html {
    use_reveal_on_scroll(config::REVEAL_SELECTOR);

    html! {
        <div class="page">
            <style>
                {r#"
                    .page {
                        font-family: 'Roboto', -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                        color: #1f2121;
                        min-height: 100vh;
                    }
                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background-color: transparent;
                        transition: background-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .header__inner {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 72px;
                    }
                    .logo {
                        font-weight: 900;
                        font-size: 24px;
                        color: #d35100;
                        text-decoration: none;
                    }
                    .nav__link {
                        display: inline-block;
                        padding: 8px 20px;
                        border-radius: 8px;
                        border: 1px solid #d35100;
                        color: #d35100;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .hero {
                        padding: 180px 0 100px;
                        text-align: center;
                    }
                    .hero__title {
                        font-size: 48px;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .hero__subtitle {
                        font-size: 20px;
                        color: #626c71;
                        max-width: 640px;
                        margin: 0 auto 32px;
                    }
                    .info {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 24px;
                        padding-bottom: 100px;
                    }
                    .info-card {
                        padding: 32px;
                        border-radius: 12px;
                        background: rgba(211, 81, 0, 0.05);
                        border: 1px solid rgba(211, 81, 0, 0.15);
                    }
                    .footer {
                        padding: 40px 0;
                        border-top: 1px solid rgba(0, 0, 0, 0.08);
                        text-align: center;
                        color: #626c71;
                    }
                    a[href^="mailto:"] {
                        color: inherit;
                        font-weight: 500;
                    }
                    @media (prefers-color-scheme: dark) {
                        .page {
                            background: #1f2121;
                            color: #f5f5f5;
                        }
                    }
                    @media (max-width: 700px) {
                        .hero__title {
                            font-size: 34px;
                        }
                    }
                "#}
            </style>
            <Header />
            <main>
                <section class="hero">
                    <div class="container hero__content">
                        <h1 class="hero__title">{"Early access has ended"}</h1>
                        <p class="hero__subtitle">
                            {"Thank you to everyone who tried SKeta during early access. "}
                            {"We are working on the public launch and will be back soon."}
                        </p>
                        <MailtoLink email={config::CONTACT_EMAIL} class={classes!("hero__cta")}>
                            {"Get in touch"}
                        </MailtoLink>
                    </div>
                </section>
                <section class="container info">
                    <InfoCard title="What happened to my account?">
                        <p>{"Early access accounts have been closed. Your data is not kept after the program ends."}</p>
                    </InfoCard>
                    <InfoCard title="When do you launch?">
                        <p>{"We will announce the launch date to everyone who took part in early access."}</p>
                    </InfoCard>
                    <InfoCard title="Questions?">
                        <p>
                            {"Write to us at "}
                            <MailtoLink email={config::CONTACT_EMAIL} />
                        </p>
                    </InfoCard>
                </section>
            </main>
            <footer class="footer">
                <div class="container footer__content">
                    <p>
                        {"SKeta · "}
                        <MailtoLink email={config::CONTACT_EMAIL} />
                    </p>
                </div>
            </footer>
        </div>
    }
}
