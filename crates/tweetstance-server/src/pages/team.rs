use axum::response::Html;

use crate::render;

struct Member {
    name: &'static str,
    role: &'static str,
    portrait: &'static str,
    bio: &'static str,
}

const MEMBERS: [Member; 5] = [
    Member {
        name: "Makhambi",
        role: "Project Manager",
        portrait: "makhambi.svg",
        bio: "Makhambi has worked as a project manager, product manager, and \
              systems and production developer. When he is not coding he \
              enjoys watching sport on television.",
    },
    Member {
        name: "Koketsho",
        role: "Data Scientist",
        portrait: "koketsho.svg",
        bio: "Koketsho has worked as a data scientist for various companies, \
              including Netflix and Apple. In her spare time she likes to \
              spend time with family and watch football.",
    },
    Member {
        name: "Onkarabile",
        role: "Machine Learning Engineer",
        portrait: "onkarabile.svg",
        bio: "Onkarabile has designed predictive models for companies such \
              as FNB and BMW, among them a chatbot built on Python's NLTK \
              library. She is a fitness fanatic and loves dancing.",
    },
    Member {
        name: "Ngcebo",
        role: "Data Analyst",
        portrait: "ngcebo.svg",
        bio: "Ngcebo is a data analyst intern who has taken part in four of \
              our projects so far. He enjoys the indoors and plays puzzle \
              video games in his spare time.",
    },
    Member {
        name: "Noluthando",
        role: "App Developer",
        portrait: "luthando.svg",
        bio: "Noluthando has worked as an app developer on multiple projects \
              with companies like PayPal and Showmax. In her spare time she \
              likes watching movies and playing video games.",
    },
];

/// `GET /team` -- the development team, with portraits served from the
/// static image directory.
pub(super) async fn show() -> Html<String> {
    let mut cards = String::from("<div class=\"team\">");
    for member in &MEMBERS {
        cards.push_str(&format!(
            "<figure><img src=\"/static/img/{portrait}\" alt=\"{name}\">\
             <figcaption><strong>{name}</strong><br>{role}</figcaption>\
             <p class=\"bio\">{bio}</p></figure>",
            portrait = member.portrait,
            name = member.name,
            role = member.role,
            bio = member.bio,
        ));
    }
    cards.push_str("</div>");

    let content = format!("<h2>Meet our team</h2>\n{cards}");
    Html(render::page("/team", &content))
}
