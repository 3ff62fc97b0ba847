use yew::prelude::*;

/// Static contact section: address, opening hours, phone, socials.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="section-intro">
                <h2>{ "Visit Us" }</h2>
                <p>{ "Book your appointment today" }</p>
            </div>

            <div class="contact-grid">
                <div class="contact-card">
                    <h3>{ "Contact Information" }</h3>

                    <div class="contact-row">
                        <span class="contact-icon">{ "📍" }</span>
                        <div>
                            <p class="contact-heading">{ "Location" }</p>
                            <p>{ "21-23 Woodgrange Road" }</p>
                            <p>{ "London E7 8BA" }</p>
                            <p>{ "(Inside Post Office)" }</p>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon">{ "🕐" }</span>
                        <div>
                            <p class="contact-heading">{ "Opening Hours" }</p>
                            <p>{ "Monday - Saturday" }</p>
                            <p>{ "11:00 AM to 6:00 PM" }</p>
                            <p class="contact-note">{ "10:00 AM - 11:00 AM: By appointment only" }</p>
                            <p class="contact-note">{ "6:00 PM - 7:00 PM: By appointment only" }</p>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon">{ "📞" }</span>
                        <div>
                            <p class="contact-heading">{ "Phone" }</p>
                            <p>{ "+44 7368 594210" }</p>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon">{ "🌐" }</span>
                        <div>
                            <p class="contact-heading">{ "Follow Us" }</p>
                            <div class="contact-socials">
                                <a
                                    href="https://www.facebook.com/profile.php?id=100066574856943"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "Facebook" }
                                </a>
                                <a
                                    href="https://www.instagram.com/feminabeautyimpression1"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "Instagram" }
                                </a>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="contact-card booking">
                    <h3>{ "Book Your Appointment" }</h3>
                    <p>
                        { "Call us or visit our social media pages to book your appointment. \
                           We offer flexible timing and professional services." }
                    </p>
                    <a class="call-button" href="tel:+447368594210">
                        { "📞 Call Now: +44 7368 594210" }
                    </a>
                </div>
            </div>
        </section>
    }
}
