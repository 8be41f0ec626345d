use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::{track_event, EventProperties};
use crate::config;

const MAILTO: &str = "mailto:";

pub fn email_from_href(href: &str) -> &str {
    href.strip_prefix(MAILTO).unwrap_or(href)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flash {
    Idle,
    Lit,
    Faded,
}

fn flash_style(flash: Flash) -> Option<String> {
    let transition = "transition: color 0.3s ease;";
    match flash {
        Flash::Idle => None,
        Flash::Lit => Some(format!("{} color: {};", transition, config::ACCENT_COLOR)),
        Flash::Faded => Some(transition.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct MailtoLinkProps {
    pub email: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// `mailto:` link that flashes the accent color and reports the click.
/// The mail client still opens as usual.
#[function_component(MailtoLink)]
pub fn mailto_link(props: &MailtoLinkProps) -> Html {
    let flash = use_state_eq(|| Flash::Idle);
    let href = format!("{}{}", MAILTO, props.email);

    let onclick = {
        let flash = flash.clone();
        let href = href.clone();
        Callback::from(move |_: MouseEvent| {
            flash.set(Flash::Lit);
            {
                let flash = flash.clone();
                Timeout::new(config::EMAIL_FLASH_MS, move || flash.set(Flash::Faded)).forget();
            }

            track_event(
                "email_click",
                &EventProperties::new()
                    .with("email", email_from_href(&href))
                    .with("page", config::PAGE_NAME),
            );
        })
    };

    html! {
        <a href={href} class={props.class.clone()} style={flash_style(*flash)} {onclick}>
            {
                if props.children.is_empty() {
                    html! { {props.email.to_string()} }
                } else {
                    html! { for props.children.iter() }
                }
            }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mailto_prefix() {
        assert_eq!(email_from_href("mailto:hello@sketa.app"), "hello@sketa.app");
        assert_eq!(email_from_href("mailto:a@b.c?subject=Hi"), "a@b.c?subject=Hi");
    }

    #[test]
    fn leaves_other_hrefs_alone() {
        assert_eq!(email_from_href("hello@sketa.app"), "hello@sketa.app");
        assert_eq!(email_from_href(""), "");
    }

    #[test]
    fn flash_lights_up_then_fades() {
        assert_eq!(flash_style(Flash::Idle), None);
        assert_eq!(
            flash_style(Flash::Lit).as_deref(),
            Some("transition: color 0.3s ease; color: #d35100;")
        );
        assert_eq!(flash_style(Flash::Faded).as_deref(), Some("transition: color 0.3s ease;"));
    }
}
