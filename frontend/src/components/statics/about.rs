use yew::{html, Component, Context, Html};

struct TeamMember {
    name: &'static str,
    title: &'static str,
    bio: &'static str,
    specialties: &'static [&'static str],
}

const VALUES: [(&str, &str); 3] = [
    (
        "Justice",
        "We are unwavering in our commitment to seeking justice for our clients and upholding the rule of law.",
    ),
    (
        "Integrity",
        "We maintain the highest ethical standards and conduct our practice with honesty and transparency.",
    ),
    (
        "Excellence",
        "We strive for excellence in every aspect of our practice and keep improving to serve clients better.",
    ),
];

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Mr. M. Ayoob Bhatti",
        title: "Senior Legal Advisor & Former Assistant Sessions Judge",
        bio: "With over 30 years of judicial and legal experience, Mr. Bhatti brings insight into \
              procedural and substantive law that shapes the firm's approach to complex litigation.",
        specialties: &[
            "Judicial & Legal Advisory",
            "Litigation Strategy",
            "Procedural & Substantive Law",
        ],
    },
    TeamMember {
        name: "Mr. Muhammad Bilal Ayub",
        title: "Advocate High Court & Head of Chambers",
        bio: "Founder of the firm, Mr. Bilal holds a Law Degree from the University of London and leads \
              its civil, criminal, corporate and family practice.",
        specialties: &["Civil Law", "Criminal Law", "Corporate Law", "Family Law", "Advocacy"],
    },
    TeamMember {
        name: "Mr. Abdul Rehman Qureshi",
        title: "Senior Legal Counsel",
        bio: "A University of London law graduate, Mr. Qureshi is a core member of the firm's \
              litigation and advisory team.",
        specialties: &["Litigation", "Legal Advisory", "Case Analysis", "Client Counseling"],
    },
];

pub struct About;

impl Component for About {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        About
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="about" class="about">
                <h2>{"About Bilal Ayub & Co."}</h2>
                <p class="section-lead">
                    {"Our mission is built on integrity, diligence and professionalism. Whether navigating \
                      complex litigation or advising on sensitive corporate issues, every client receives \
                      personalized attention and dedicated representation."}
                </p>

                <div class="card-grid">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <article class="card value">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    }) }
                </div>

                <h3 class="team-heading">{"Our Team"}</h3>
                <div class="team">
                    { for TEAM.iter().map(team_card) }
                </div>
            </section>
        }
    }
}

fn team_card(member: &TeamMember) -> Html {
    html! {
        <article class="team-member" key={member.name}>
            <h4>{member.name}</h4>
            <p class="team-title">{member.title}</p>
            <p>{member.bio}</p>
            <ul class="specialties">
                { for member.specialties.iter().map(|s| html! { <li>{*s}</li> }) }
            </ul>
        </article>
    }
}
