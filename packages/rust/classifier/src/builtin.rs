//! The built-in rationale catalog.
//!
//! Groups own disjoint sets of requirement families. Rules inside a group are
//! evaluated top to bottom and the first match wins, so specific phrases must
//! precede the broader keywords that would also match them.

use crate::catalog::{Catalog, FamilyGroup, Rule};

/// `rule!("a" & "b" | "c" => "text")`: matches when the title contains both
/// `a` and `b`, or contains `c`.
macro_rules! rule {
    ($($($term:literal)&+)|+ => $text:literal) => {
        Rule::new(&[$(&[$($term),+]),+], $text)
    };
}

const GLOBAL_FALLBACK: &str =
    "This requirement supports community autonomy, mutual aid, and building post-scarcity resilience.";

/// Build the default catalog.
pub(crate) fn catalog() -> Catalog {
    Catalog::new(
        GLOBAL_FALLBACK,
        vec![
            ai(),
            time_banking(),
            resource_sharing(),
            governance(),
            care(),
            food(),
            energy(),
            water_ecology(),
            housing(),
            culture_tech_health(),
            economic_solidarity(),
            deployment(),
            future_experimental(),
        ],
    )
}

fn ai() -> FamilyGroup {
    FamilyGroup::new(
        "ai",
        &[
            "AI",
            "AI-ARCH",
            "AI-RESOURCE",
            "AI-TIME",
            "AI-HEALTH",
            "AI-FOOD",
            "AI-ENERGY",
            "AI-LEARN",
            "AI-EVENT",
            "AI-EMERGENCY",
            "AI-GOV",
            "AI-DATA",
            "AI-NLU",
            "AI-META",
        ],
    )
    .with_prefixes(&["AI-"])
    .with_rules(vec![
        rule!("transparency" | "explain" => "Users must understand why AI makes suggestions to maintain agency and trust in the system."),
        rule!("privacy" => "Surveillance capitalism is incompatible with liberation; AI must learn and improve while preserving individual privacy."),
        rule!("collective benefit" => "Post-scarcity requires abundance thinking; AI should help everyone thrive, not create competition."),
        rule!("accessibility" | "multilingual" => "Technology must be accessible to all community members regardless of ability or language; inclusive design is justice."),
        rule!("bias" | "discrimination" => "AI can perpetuate historical discrimination; active anti-bias work ensures equitable access and treatment for all."),
        rule!("context" | "conversation" => "Humans communicate contextually over time; AI that remembers context provides coherent, helpful assistance."),
        rule!("match" | "coordin" => "Complex coordination overwhelms humans; AI excels at multi-factor optimization while preserving human agency."),
        rule!("proactive" | "suggest" => "Reactive systems require users to know what to search for; proactive discovery surfaces opportunities users didn't know existed."),
        rule!("load" | "balance" => "Burnout harms individuals and communities; intelligent load balancing ensures sustainable participation."),
        rule!("conversational" | "natural language" => "Natural conversation removes barriers; people should express needs in their own words, not learn system syntax."),
        rule!("pattern" | "need" => "Identifying patterns helps communities plan proactively rather than reacting to recurring problems."),
        rule!("skill gap" => "Unmet needs reveal skill gaps; identifying these helps communities build capacity where it's needed most."),
        rule!("resource utilization" => "Maximizing resource use reduces waste; identifying underutilized assets helps redistribute access."),
        rule!("community health" => "Healthy communities require attention to collective wellbeing; monitoring enables supportive intervention."),
        rule!("adaptation" | "skill" => "People have diverse technological comfort; AI should meet users where they are, not force conformity."),
        rule!("manipulation" => "Liberation requires authentic choice, not engineered compliance; ethical AI respects human autonomy."),
        rule!("open source" => "Communities should own and understand the AI that serves them, not depend on proprietary black boxes."),
        rule!("event" => "Fully automated luxury space communism means AI handles the logistics of joy so humans can focus on the celebration."),
    ])
    .with_fallback("AI agents handle coordination work so humans can focus on creativity, connection, and joy—the essence of fully automated luxury space communism.")
}

fn time_banking() -> FamilyGroup {
    FamilyGroup::new("time-banking", &["TIME"])
        .with_rules(vec![
            rule!("skill" => "Diverse skills meet diverse needs; flexible taxonomies enable communities to describe their actual capacities."),
            rule!("match" | "coordinat" => "AI can optimize complex time and skill matching that would overwhelm manual coordination."),
            rule!("accessibility" => "Mutual aid must be accessible to all; accommodating diverse abilities ensures inclusive participation."),
            rule!("geographic" => "Ultra-local connections build neighborhood resilience and reduce transportation barriers."),
            rule!("preference" => "Respecting preferences while maintaining flexibility creates satisfying matches without rigid requirements."),
            rule!("commun" => "Clear communication prevents misunderstandings; good coordination makes helping easy and reliable."),
            rule!("participation" => "Gentle invitation respects autonomy while building culture where everyone contributes and receives."),
            rule!("burnout" => "Sustainable participation requires pacing; caring for volunteers ensures long-term community vitality."),
            rule!("recognition" => "Celebrating contributions builds participation without hierarchy; gratitude strengthens community bonds."),
        ])
        .with_fallback("Time and skill sharing builds community bonds while meeting real needs through cooperation.")
}

fn resource_sharing() -> FamilyGroup {
    FamilyGroup::new("resource-sharing", &["SHARE"])
        .with_rules(vec![
            rule!("tool" | "equipment" => "Most tools sit unused; sharing maximizes utility while reducing consumption and building community."),
            rule!("space" => "Shared spaces enable community activity; coordinated access ensures equitable use."),
            rule!("robot" | "autonomous" => "Future technologies should be community-owned and shared, not locked behind individual wealth."),
            rule!("lifecycle" | "maintenance" => "Shared resources require shared responsibility; tracking ensures things stay functional and available."),
            rule!("collective" | "ownership" => "Collective ownership builds true commons; shared governance ensures resources serve community needs."),
            rule!("condition" | "quality" => "Transparency about condition prevents disappointment; documentation helps maintain resource quality."),
            rule!("skill" & "knowledge" => "Tools without knowledge are intimidating; sharing expertise makes resources accessible to all."),
            rule!("discover" => "The best resources are ones you didn't know existed; intelligent discovery unlocks community abundance."),
            rule!("proximity" => "Local sharing reduces transportation needs, builds neighborhood connections, and increases resilience."),
            rule!("pickup" | "delivery" => "Logistics shouldn't be a barrier; coordinated exchange makes sharing actually work."),
            rule!("gratitude" => "Gratitude without obligation maintains gift economy; appreciation strengthens bonds without creating debt."),
            rule!("safety" | "trust" => "Community-based safety strengthens bonds; restorative approaches build trust better than punishment."),
            rule!("insurance" | "risk" => "Transparency about responsibility and mutual aid for accidents maintains trust in sharing systems."),
            rule!("skill-appropriate" => "Safety and skill requirements protect people and resources; matching expertise to tools prevents harm."),
            rule!("energy" => "Solarpunk communities generate their own clean energy; sharing excess capacity builds resilience and reduces waste."),
            rule!("battery" => "Distributed battery storage smooths renewable generation; community coordination maximizes renewable utilization."),
            rule!("load" => "Timing energy-intensive activities with renewable availability reduces fossil fuel dependence."),
            rule!("microgrid" => "Community microgrids enable autonomous, resilient operation when centralized systems fail."),
            rule!("visibility" => "Aggregate visibility enables planning without individual surveillance; community-level data respects privacy."),
        ])
        .with_fallback("Sharing builds community while reducing consumption; commons-based resources serve everyone.")
}

fn governance() -> FamilyGroup {
    FamilyGroup::new("governance", &["GOV"])
        .with_rules(vec![
            rule!("community" & "group" | "community" & "commune" => "From neighborhoods to communes, diverse organizing forms require flexible infrastructure."),
            rule!("philosophy" | "values" => "Clear values help people find aligned communities and enable informed consent about joining."),
            rule!("space" | "land" => "Making available spaces visible enables people to find communities and communities to find members."),
            rule!("discovery" | "matching" => "Values alignment matters more than proximity; intelligent matching helps people find their community."),
            rule!("review" | "transparency" => "Power imbalances and cult dynamics thrive in secrecy; transparency protects vulnerable people."),
            rule!("red flag" | "cult" => "Solarpunk utopia means liberation for all, not charismatic leaders exploiting followers."),
            rule!("exit" => "Freedom includes the right to leave; any community that prevents exit is a prison."),
            rule!("conflict" => "Healthy communities need accessible conflict resolution; core platform features normalize constructive conflict handling."),
            rule!("space" & "listing" => "Shared spaces require coordination; clear information enables equitable access and care."),
            rule!("maintenance" | "care" => "Shared spaces require shared maintenance; coordination prevents tragedy of the commons."),
            rule!("harvest" => "Coordinating harvest ensures equitable sharing and prevents waste of community labor."),
            rule!("garden" & "availability" => "Real-time availability helps people harvest at peak ripeness and prevents waste."),
            rule!("class" | "workshop" => "Shared knowledge builds community capacity and resilience; education strengthens collective power."),
            rule!("learning cooperative" => "Cooperative education distributes expertise and costs; shared teaching builds strong learning communities."),
            rule!("mentorship" => "Long-term mentorship develops deep skills; structured programs ensure knowledge transfer."),
            rule!("cooperative formation" => "Worker and housing cooperatives democratize economy; platform support makes formation accessible."),
            rule!("purchasing" => "Bulk purchasing achieves economies of scale while maintaining non-monetary internal distribution."),
            rule!("unstructured" | "bulletin" => "Not everything fits clean categories; humans should be able to express needs naturally."),
            rule!("chore" => "Transparent, equitable distribution of work prevents burnout and ensures everyone knows how they can help."),
            rule!("swap" | "coverage" => "Life conflicts happen; easy shift swapping maintains reliability while respecting flexibility."),
            rule!("ticket" | "maintenance ticket" => "This is an operating system for a commune; tracking maintenance needs ensures nothing falls through the cracks."),
            rule!("mediation" => "Healthy communities need accessible conflict resolution; core platform features normalize addressing conflicts constructively."),
            rule!("democratic" => "Democracy requires tools for participation; software should enable not constrain collective decision-making."),
            rule!("consent" | "sociocratic" => "Consent-based models seek solutions without objections; supporting diverse governance models respects community autonomy."),
            rule!("federated" => "Nested governance enables local autonomy with regional coordination; federation scales solidarity."),
            rule!("inclusive" | "asynchronous" => "Everyone deserves voice in decisions; asynchronous and accessible participation removes barriers."),
        ])
        .with_fallback("Democratic governance ensures communities serve their members; tools should enable participatory decision-making.")
}

fn care() -> FamilyGroup {
    FamilyGroup::new("care", &["CARE"])
        .with_rules(vec![
            rule!("check-in" | "elderly" | "disabled" => "Solarpunk communities care for all members; technology should support mutual care without surveillance."),
            rule!("emergency" | "alert" => "Rapid response to urgent needs saves lives and demonstrates community care in action."),
            rule!("gradual" | "recovery" => "Care adapts to changing needs; support that scales with recovery respects autonomy and healing."),
            rule!("matching" => "AI can match care needs with willing caregivers, building relationships while meeting needs."),
            rule!("sensor" | "monitoring" => "Old phones have sensors; collectively they create valuable environmental data for community safety and planning."),
            rule!("weather" => "Hyperlocal weather data improves planning and identifies microclimates for gardens and outdoor activities."),
            rule!("event" & "environmental" => "Early detection of environmental dangers enables protective community response."),
            rule!("climate" & "planning" => "Long-term local data informs adaptation strategies; communities can plan based on actual conditions."),
            rule!("citizen science" => "Community data contributes to broader understanding; local monitoring serves both community and science."),
            rule!("food" => "Food is a right, not a commodity; community coordination ensures no one goes hungry."),
            rule!("meal" => "Shared meals build community; coordination ensures support reaches those who need it."),
            rule!("surplus" => "Garden abundance should feed community; coordination prevents waste and addresses food insecurity."),
            rule!("emergency" & "coordination" => "Disasters test community resilience; coordinated mutual aid response saves lives."),
            rule!("mutual aid registry" => "Knowing community capacities enables rapid mobilization in emergencies."),
            rule!("resilience mapping" => "Understanding resources and vulnerabilities enables preparation; mapping builds community readiness."),
            rule!("wellbeing" => "Mental health is community health; aggregate awareness enables collective care responses."),
            rule!("peer support" => "Peer support based on shared experience builds connection and reduces isolation."),
            rule!("joy" | "celebration" => "Post-scarcity is about abundance of joy, not just meeting basic needs; celebrating wins builds community culture."),
        ])
        .with_fallback("Mutual aid means caring for each other; systems should enable collective care and resilience.")
}

fn food() -> FamilyGroup {
    FamilyGroup::new("food", &["FOOD"])
        .with_rules(vec![
            rule!("seed" => "Seed sovereignty is food sovereignty; communities should control their genetic heritage and preserve biodiversity."),
            rule!("plant" & "starts" | "plant" & "cutting" => "Sharing plants multiplies abundance; propagation skills and materials should circulate freely."),
            rule!("perennial" | "food forest" => "Perennial systems require less work, build soil, and are more resilient to climate chaos."),
            rule!("forag" => "Wild foods are abundant but require knowledge and ethical harvesting; sharing knowledge builds food security without depleting ecosystems."),
            rule!("pollinator" => "Pollinators are essential for food production; coordinated habitat creation builds agricultural resilience."),
            rule!("urban" | "distributed" => "Collectively, small spaces add up to significant food production; coordination prevents duplication and maximizes diversity."),
            rule!("pest" => "Coordinated organic pest management across gardens is more effective than isolated responses."),
            rule!("water" | "irrigation" => "Water is precious; shared infrastructure and coordinated use maximizes efficiency."),
            rule!("compost" => "Compost is essential for regenerative agriculture and should never be wasted in landfills."),
            rule!("tool" => "Specialized garden tools are expensive and rarely used; sharing makes them accessible to all."),
            rule!("preservation" => "Preservation is essential for year-round food security; collective work makes big harvests manageable and fun."),
            rule!("storage" => "Shared storage infrastructure enables food preservation; community facilities serve multiple households."),
            rule!("dehydration" => "Equipment sharing makes preservation accessible; coordinated processing handles abundance efficiently."),
            rule!("harvest planning" => "Planning preservation goals prevents winter scarcity; tracking consumption improves future planning."),
            rule!("recipe" => "Sharing culinary knowledge helps people use seasonal abundance; recipes preserve cultural food traditions."),
            rule!("bulk" => "Collective purchasing achieves economies of scale; bulk buying makes quality food more affordable."),
            rule!("glean" => "Vast amounts of food are wasted while people go hungry; coordination can redirect abundance to where it's needed."),
            rule!("skill" & "progression" => "Everyone can learn to grow food; mentorship and progression build community capacity."),
            rule!("specialty" => "Deep expertise in specific crops builds community knowledge; specialist circles advance collective practice."),
            rule!("seed saving" & "education" => "Seed saving skills build sovereignty; comprehensive education creates redundant capacity."),
            rule!("experiment" => "Experimentation drives improvement; coordinated trials build location-specific knowledge."),
            rule!("aquaponics" | "integrated" => "Integrated systems create synergies; shared learning accelerates adoption of efficient methods."),
            rule!("climate adaptation" => "Climate change requires agricultural adaptation; coordinated experimentation finds resilient solutions."),
        ])
        .with_fallback("Food sovereignty and local production build community resilience and food security.")
}

fn energy() -> FamilyGroup {
    FamilyGroup::new("energy", &["ENERGY"])
        .with_rules(vec![
            rule!("solar garden" | "community solar" => "Not everyone has optimal roof space; shared installations democratize solar access and achieve economies of scale."),
            rule!("wind" => "Distributed wind generation complements solar; community coordination builds diverse renewable capacity."),
            rule!("micro-hydro" => "Where water flows, energy can be generated; micro-hydro provides consistent renewable power."),
            rule!("human-powered" | "pedal" => "Human power is always renewable; combining exercise with energy generation builds culture and capacity."),
            rule!("heat pump" => "Shared heat pump infrastructure achieves efficiency at scale; collective investment makes technology accessible."),
            rule!("weatherization" | "efficiency" => "Bulk purchasing reduces costs; shared knowledge and labor makes retrofitting accessible to all."),
            rule!("skill share" => "DIY skills enable household improvements; education builds capacity and reduces costs."),
            rule!("thermal imaging" => "Expensive equipment shared across community makes energy audits accessible to all."),
            rule!("passive solar" => "Passive strategies require knowledge not money; education enables zero-cost comfort improvements."),
            rule!("vehicle sharing" | "ev" => "Most vehicles sit unused 95% of the time; sharing maximizes utility and reduces resource consumption."),
            rule!("bike" => "Bikes enable human-scale transportation; shared infrastructure and skills make cycling accessible."),
            rule!("route" => "Local knowledge makes active transportation safer; shared routes build biking and walking culture."),
            rule!("transit" => "Public transit works better together; coordination builds ridership and supports transit advocacy."),
            rule!("cargo bike" => "Cargo bikes can replace car trips; shared access and skills enable fossil-free logistics."),
            rule!("backup" | "resilience" => "Distributed backup power creates community resilience; coordination enables mutual aid during outages."),
            rule!("load shift" => "Timing energy use with renewable generation reduces fossil fuel dependence; coordination maximizes clean energy."),
            rule!("monitoring" | "transparency" => "Community-wide visibility enables planning and optimization while preserving household privacy."),
            rule!("governance" | "cooperative" => "Democratic governance of energy systems builds energy democracy; communities should control their power."),
            rule!("justice" | "access" => "Energy is a right; solarpunk communities ensure universal access to clean, affordable energy."),
            rule!("utility" => "Collective action builds political power; organized communities can push utilities toward renewable energy."),
            rule!("electrification" | "heat pump conversion" => "Eliminating fossil fuel use requires electrification; coordination makes transition affordable."),
            rule!("induction" => "Gas cooking harms health and climate; supporting electric alternatives enables complete fossil fuel elimination."),
            rule!("charging" => "EV adoption requires charging infrastructure; community coordination ensures equitable access."),
            rule!("literacy" => "Energy literacy builds agency; informed communities make better energy decisions."),
            rule!("diy" & "renewable" => "Hands-on experience demystifies technology; DIY builds confidence and understanding."),
        ])
        .with_fallback("Renewable energy, efficiency, and reduced consumption enable community energy independence.")
}

fn water_ecology() -> FamilyGroup {
    FamilyGroup::new("water-ecology", &["WATER"])
        .with_rules(vec![
            rule!("rainwater" => "Every roof is a watershed; capturing rainwater reduces stormwater runoff, recharges groundwater, and builds water independence."),
            rule!("greywater" => "Greywater reuse reduces consumption; coordinated systems make water go further."),
            rule!("cistern" => "Shared water storage builds drought resilience; community infrastructure serves multiple households."),
            rule!("well" | "spring" => "Understanding local water sources builds resilience but must be balanced with aquifer health."),
            rule!("quality" & "testing" => "Community-based monitoring detects contamination early; shared testing builds water knowledge."),
            rule!("drought" => "Climate change brings increased drought; proactive preparation builds water security."),
            rule!("native plant" => "Native plants support biodiversity, require less water, and rebuild ecosystem health."),
            rule!("invasive" => "Invasive species degrade ecosystems; coordinated removal and native restoration rebuilds health."),
            rule!("stream" => "Healthy streams support biodiversity, filter water, recharge aquifers, and provide community amenities."),
            rule!("wildlife" => "Wildlife habitat creates biodiversity; coordinated creation connects fragments into functional corridors."),
            rule!("biodiversity" => "Tracking biodiversity over time reveals ecosystem health; citizen science contributes to conservation."),
            rule!("tree" => "Trees provide shade, clean air, sequester carbon, build soil, and create habitat; caring for trees builds ecological connection."),
            rule!("repair" => "Repair extends product life, builds skills, saves money, and creates culture of stewardship over disposal."),
            rule!("upcycl" | "reuse" => "Creative reuse prevents waste; material exchange builds culture of resourcefulness."),
            rule!("mending" | "textile" => "Mending extends clothing life; circles make repair social and skills accessible."),
            rule!("zero waste" => "Waste reduction requires education and support; collective challenges build sustainable practices."),
            rule!("clothing swap" => "Swaps enable wardrobe renewal without consumption; sharing reduces textile waste."),
            rule!("symbiosis" => "In circular economy, waste is just a resource in the wrong place; coordination closes loops."),
            rule!("soil" => "Soil health determines growing capacity; monitoring and improvement build long-term productivity."),
            rule!("sheet mulch" => "Sheet mulching converts lawn to productive land; collective action transforms landscapes."),
            rule!("worm" | "vermi" => "Worms transform food scraps into fertility; sharing worms and knowledge builds soil biology."),
            rule!("ecological literacy" => "Understanding local ecosystems builds connection and stewardship; bioregional identity grounds communities."),
            rule!("wilderness" => "Wilderness skills build confidence and connection; ethical harvesting respects and honors nature."),
            rule!("permaculture" => "Permaculture design creates regenerative systems; education builds capacity for transformation."),
            rule!("water-energy" => "Water and energy systems are interconnected; integrated planning optimizes both."),
        ])
        .with_fallback("Water conservation, ecosystem restoration, and waste reduction build ecological resilience.")
}

fn housing() -> FamilyGroup {
    FamilyGroup::new("housing", &["HOUSING"])
        .with_rules(vec![
            rule!("cohousing" => "Co-housing combines privacy with community, reduces resource use through sharing, and creates built environments for mutual support."),
            rule!("land trust" => "Land speculation drives housing unaffordability; community ownership ensures housing serves people not profit."),
            rule!("tiny house" => "Tiny houses offer affordable, low-impact housing; village models build community while reducing costs."),
            rule!("adu" | "accessory dwelling" => "ADUs increase housing supply on existing land; matching creates housing while building community."),
            rule!("intergenerational" => "Elders have space and wisdom; younger people have energy and companionship; together they reduce isolation and build resilience."),
            rule!("natural building" => "Natural building uses local, non-toxic, low-carbon materials; sharing knowledge makes sustainable construction accessible."),
            rule!("material" & "sourcing" => "Local, natural materials reduce embodied energy; coordinated sourcing builds supply networks."),
            rule!("green roof" | "living wall" => "Green infrastructure provides cooling, stormwater management, and habitat; shared skills enable widespread adoption."),
            rule!("reclaimed" | "salvage" => "Demolition creates waste; salvage creates resources and preserves embodied energy."),
            rule!("owner-builder" => "Self-building reduces costs dramatically; peer networks make it accessible to more people."),
            rule!("parklet" => "Streets belong to people, not just cars; reclaiming space for sitting, playing, and gathering builds community."),
            rule!("library" | "community box" => "Sharing infrastructure in public space normalizes gift economy and builds neighborhood culture."),
            rule!("art" | "mural" => "Public art creates beauty and identity; participatory creation builds ownership and pride."),
            rule!("guerrilla" => "Unused land can become beauty and food; sometimes asking forgiveness is easier than permission."),
            rule!("alley" | "courtyard" => "Underutilized alley space can become shared community gathering places."),
            rule!("conversion" | "adaptive reuse" => "Empty buildings represent waste; conversion creates housing and community space."),
            rule!("commercial kitchen" | "shared commercial" => "Shared commercial infrastructure enables small-scale production; collective facilities reduce barriers to entry."),
            rule!("tenant" => "Housing is a human right; collective tenant power protects people from displacement and exploitation."),
            rule!("displacement" | "gentrification" => "Displacement destroys communities; organized resistance and alternatives protect housing rights."),
            rule!("co-op" & "housing" => "Resident ownership removes housing from speculative market; cooperatives build permanent affordability."),
            rule!("accessibility" & "retrofit" => "Accessibility enables aging in place and independence; collective support makes modifications affordable."),
            rule!("universal design" => "Universal design serves everyone from the start; education prevents costly retrofits."),
            rule!("building code" => "Overly restrictive codes prevent sustainable, affordable housing; collective advocacy can reform regulations."),
            rule!("zoning" => "Exclusionary zoning prevents density and diversity; reform enables affordable housing types."),
        ])
        .with_fallback("Alternative housing models and community ownership make housing affordable and sustainable.")
}

fn culture_tech_health() -> FamilyGroup {
    FamilyGroup::new("culture-tech-health", &["CULTURE", "TECH", "HEALTH"])
        .with_rules(vec![
            rule!("archive" | "history" => "Communities have rich histories that deserve preservation; documenting stories builds connection and identity."),
            rule!("knowledge" & "local" => "Place-based knowledge is precious and endangered; documentation preserves wisdom while respecting cultural protocols."),
            rule!("indigenous" | "land acknowledgment" => "All land is Indigenous land; solarpunk communities must practice solidarity and accountability with original peoples."),
            rule!("community archive" => "Accessible archives make history available to all; organized materials build collective memory."),
            rule!("workshop" | "maker" => "Shared workshops reduce individual tool ownership needs; collective spaces build making community."),
            rule!("fabrication" | "fab lab" => "Digital fabrication democratizes production; community labs make advanced tools accessible."),
            rule!("art studio" | "creative" => "Creative spaces enable artistic expression; shared access removes financial barriers to art-making."),
            rule!("music" & "practice" => "Practice spaces enable musicians to develop skills; sound isolation makes loud practice considerate."),
            rule!("library of things" => "Most specialty items are rarely used; sharing makes them accessible while reducing consumption."),
            rule!("instrument" => "Musical instruments are expensive barriers; lending removes financial obstacles to music education."),
            rule!("electronics" & "lab" => "Electronics labs enable repair and creation; shared equipment builds technological self-sufficiency."),
            rule!("arduino" | "microcontroller" => "Hardware programming enables automation and sensing; accessible education demystifies computing."),
            rule!("mesh" & "hardware" => "Communications resilience requires community-owned infrastructure; teaching builds capacity."),
            rule!("solar" & "diy" => "Hands-on solar experience builds confidence; DIY skills enable self-sufficiency."),
            rule!("lab" & "community" => "Science should be accessible to all, not locked in institutions; community labs democratize knowledge creation."),
            rule!("fermentation" | "mycology" => "Fermentation and fungi provide food and medicine; shared knowledge and cultures build capacity."),
            rule!("herb" & "medicin" => "Plant medicine is accessible, sustainable, and empowering when practiced safely and knowledgeably."),
            rule!("soil biology" => "Understanding soil life improves growing; microscopy makes invisible ecosystems visible."),
            rule!("biogas" => "Biogas captures energy from waste; digesters close nutrient and energy loops."),
            rule!("health worker" => "Professional healthcare is necessary but insufficient; peer health support builds resilience and prevention."),
            rule!("first aid" | "emergency response" => "Communities with emergency response capacity save lives; training builds resilient response networks."),
            rule!("herbal medicine" & "workshop" => "Herbal medicine traditions offer accessible healing; education must emphasize safety and respect for knowledge holders."),
            rule!("harm reduction" => "Prohibition and criminalization increase harm; harm reduction saves lives and respects autonomy."),
            rule!("reproductive" => "Reproductive healthcare is a right; community support ensures access regardless of policy or resources."),
            rule!("bodywork" | "somatic" => "Bodywork supports healing and wellness; time bank exchange makes it accessible beyond market rates."),
            rule!("meditation" => "Meditation supports mental health and presence; collective practice builds contemplative community."),
            rule!("traditional healing" => "Many cultures have healing traditions; sharing requires respect, attribution, and often permission from knowledge holders."),
            rule!("sauna" | "bathhouse" => "Communal bathing builds health and community; shared heat therapy provides accessible wellness."),
            rule!("movement" & "practices" => "Movement supports physical and mental health; accessible offerings remove financial barriers."),
            rule!("disability" & "mutual aid" => "Disabled people are experts in their own needs; peer support honors this while building collective care."),
            rule!("assistive technology" => "Assistive technology should be affordable and accessible; DIY and sharing remove barriers."),
            rule!("accessibility advocacy" => "Disabled people must lead accessibility work; nothing about us without us."),
            rule!("ableism" => "Dismantling ableism requires education and practice; disability justice builds truly inclusive communities."),
            rule!("seasonal" | "festival" => "Celebrations build culture, connection, and joy; marking seasons connects to earth cycles."),
            rule!("rites of passage" => "Meaningful transitions require ritual; community-created ceremonies honor life stages."),
            rule!("death" => "Industrial culture hides death and privatizes grief; reclaiming death rituals builds healthy relationship with mortality."),
            rule!("theater" => "Theater tells stories and builds community; collective creation makes art accessible to all."),
            rule!("play" => "Adults need play too; solarpunk means reclaiming joy, creativity, and non-productive fun."),
        ])
        .with_fallback("Community culture, accessible technology, and holistic health build flourishing, autonomous communities.")
}

fn economic_solidarity() -> FamilyGroup {
    FamilyGroup::new("economic-solidarity", &["ECON", "SOLIDARITY"])
        .with_rules(vec![
            rule!("resource-based" => "Money abstracts away actual resource use and needs; tracking real resources enables post-scarcity planning."),
            rule!("contribution visibility" => "Recognizing contributions builds participation and gratitude; visibility without obligation maintains gift economy."),
            rule!("mutual credit" => "Mutual credit enables exchange without external money; trust-based systems build economic autonomy."),
            rule!("gift economy" => "Gift economy creates stronger bonds than market exchange; teaching these principles builds post-capitalist culture."),
            rule!("cooperative" & "incubation" => "Worker cooperatives democratize the workplace and keep wealth in community; support makes them accessible."),
            rule!("shared services" => "Pooling professional services reduces overhead; shared infrastructure enables small cooperative businesses."),
            rule!("inter-cooperative" => "Cooperatives cooperating with each other builds solidarity economy and collective power."),
            rule!("workplace" & "democratic" => "Democratic workplace skills enable cooperative enterprise; education transforms workplace relationships."),
            rule!("crowdfunding" => "Collective investment builds shared ownership; crowdfunding enables community-scale projects."),
            rule!("resource pooling" => "Pooling resources achieves scale; collective purchasing creates community productive capacity."),
            rule!("community-owned" => "Community ownership keeps wealth local; democratic enterprises serve community needs."),
            rule!("financing" & "cooperative" => "Solidarity financing avoids extractive debt; patient capital enables cooperative development."),
            rule!("preferential" => "Supporting cooperative and community businesses builds alternative economy and keeps wealth circulating locally."),
            rule!("mapping" & "solidarity" => "Mapping makes alternatives visible; seeing the ecosystem enables connections and growth."),
            rule!("supply chain" => "Ethical supply chains ensure fair labor and democratic governance; alternatives to corporate chains build economic justice."),
            rule!("movement" & "connection" => "Local mutual aid connects to global struggle; solidarity means coordinated action for systemic change."),
            rule!("resource sharing between" => "Inter-community solidarity builds resilience; reciprocal aid strengthens movement networks."),
            rule!("strike" => "Workers withholding labor is powerful; community support makes strikes sustainable and winnable."),
            rule!("eviction" | "housing defense" => "Housing is a human right; collective action can prevent displacement and homelessness."),
            rule!("land back" => "All land is Indigenous land; settlers must practice accountability and rematriation."),
            rule!("reparations" => "Historical and ongoing harm requires repair; reparations mean redistributing resources and power."),
            rule!("transformative justice" => "Prisons don't create justice or healing; communities can address harm through accountability and transformation."),
            rule!("anti-racist" => "Dismantling racism requires ongoing work; BIPOC leadership builds racial justice."),
            rule!("direct action" => "Direct action disrupts business-as-usual and builds power; strategic action creates material change."),
            rule!("divestment" => "Financial pressure weakens fossil fuel industry; divestment campaigns build climate movement."),
            rule!("political" & "organizing" => "Systemic change requires political power; organized communities can win policy victories."),
            rule!("climate strike" => "Mass mobilization builds climate movement; local participation connects to global action."),
            rule!("just transition" => "Climate justice requires ensuring workers and communities aren't left behind in transition."),
        ])
        .with_fallback("Economic democracy, solidarity networks, and movement building enable systemic transformation.")
}

fn deployment() -> FamilyGroup {
    FamilyGroup::new("deployment", &["DEPLOY"])
        .with_rules(vec![
            rule!("termux" => "Everyone should be able to participate regardless of device age or resources."),
            rule!("minimal resource" => "The platform must work on constrained devices; efficiency enables universal access."),
            rule!("progressive web" | "pwa" => "PWAs work across devices and offline; web technology ensures broad compatibility."),
            rule!("energy efficiency" => "Solarpunk means running on clean energy; devices must be energy-efficient to run on limited solar charging."),
            rule!("offline" => "The platform must work without internet; offline-first ensures resilience."),
            rule!("meshtastic" => "Resilient communities need communication systems that don't depend on centralized infrastructure or corporate networks."),
            rule!("dtn" | "delay tolerant" => "In disaster, rural, or infrastructure-poor environments, networks are intermittent; DTN ensures information still flows."),
            rule!("peer-to-peer" => "Direct device-to-device sync eliminates dependence on central servers."),
            rule!("value flows" => "Value Flows provides well-designed ontology for non-monetary economic coordination; adopting standards enables interoperability."),
            rule!("local-first" => "Local-first architecture enables offline operation and peer-to-peer sync without central coordination."),
            rule!("sovereignty" | "data sovereignty" => "Communities should own their data, not depend on corporate platforms or centralized control."),
            rule!("portability" => "People move between communities; data portability enables continuity and reputation transfer."),
            rule!("activitypub" => "Solarpunk networks should be interoperable, not isolated; ActivityPub is the standard for federated social systems."),
            rule!("api" => "Integration with other tools extends functionality; well-documented APIs enable ecosystem development."),
            rule!("import" => "Migration from existing platforms should be smooth; import tools enable community transitions."),
            rule!("encryption" => "Privacy requires encryption; end-to-end security prevents unauthorized access."),
            rule!("decentralized identity" => "Users should control their identity; decentralized systems prevent vendor lock-in."),
            rule!("privacy by design" => "Privacy should be default not optional; minimal data collection respects autonomy."),
            rule!("easy" & "deployment" => "Communities without deep technical expertise should be able to self-host; accessibility enables adoption."),
            rule!("resilient" => "Infrastructure failures shouldn't break the platform; graceful degradation ensures continuity."),
            rule!("multi-platform" => "People use diverse devices; cross-platform support ensures universal access."),
            rule!("health monitoring" => "Communities need visibility into system health; monitoring enables maintenance without surveillance."),
            rule!("automatic updates" => "Security requires patching; automatic updates balance security with community control."),
            rule!("backup" => "Data loss destroys community memory; simple backup enables disaster recovery."),
            rule!("lightweight" => "Performance on slow networks and old devices requires optimization; efficiency enables universal access."),
            rule!("scalable" => "Communities range from dozens to thousands; the platform must scale efficiently."),
        ])
        .with_fallback("The platform must work in resource-constrained environments; accessibility and resilience are fundamental.")
}

fn future_experimental() -> FamilyGroup {
    FamilyGroup::new(
        "future-experimental",
        &[
            "FUTURE",
            "EXPERIMENT",
            "RESILIENCE",
            "COMM",
            "SOVEREIGNTY",
            "META",
        ],
    )
    .with_rules(vec![
        rule!("drone" & "delivery" => "Autonomous drones can deliver medicine, food, supplies while reducing vehicle traffic; community ownership ensures democratic control."),
        rule!("drone" & "agricultural" => "Aerial monitoring enables precision agriculture; early detection of problems enables targeted response."),
        rule!("cleaning robot" => "Automated cleaning reduces drudgery; shared robots serve multiple households efficiently."),
        rule!("autonomous vehicle" => "If/when autonomous vehicles exist, they should be community-owned and shared, not corporate robot taxis."),
        rule!("bioprinting" => "Bioprinting could democratize medical technology; community control prevents monopolization."),
        rule!("molecular assembler" => "If molecular assembly becomes real, it must be community-controlled for true post-scarcity."),
        rule!("recycling robot" => "Automated sorting closes material loops; robots can separate materials more effectively than humans."),
        rule!("mycelium" => "Mycelium grows into shapes, is compostable, requires minimal energy—perfect for solarpunk manufacturing."),
        rule!("lab-grown" => "Cellular agriculture eliminates animal harm; community production democratizes material access."),
        rule!("weather balloon" => "Atmospheric research builds scientific capacity; accessible aerospace engages youth."),
        rule!("amateur radio" & "satellite" => "Radio and satellite enable communications resilience independent of corporate infrastructure."),
        rule!("decentralized internet" | "satellite internet" => "Decentralized satellite networks escape corporate ISP control; community ground stations enable autonomy."),
        rule!("climate modeling" => "Local climate modeling enables data-driven adaptation; simulation reveals best strategies."),
        rule!("asteroid mining" => "If asteroid mining becomes real, it must benefit humanity not just billionaires."),
        rule!("autonomous zone" | "taz" => "Temporary experiments let us practice future social forms with lower stakes and higher creativity."),
        rule!("street reclamation" | "street party" => "Reclaiming streets demonstrates alternative uses; temporary car-free zones prefigure permanent change."),
        rule!("occupation" => "Empty buildings while people are homeless is violence; occupations create housing and challenge property relations."),
        rule!("festival convergence" => "Gatherings build movement relationships; skill-sharing strengthens network capacity."),
        rule!("prefiguration" => "The platform should embody the values it enables; building it is practicing the future."),
        rule!("speculative design" => "Imagining alternatives makes them possible; design fiction bridges present to future."),
        rule!("radical experimentation" => "Innovation requires permission to fail; experimentation spaces enable creative risk-taking."),
        rule!("community defense" | "safety team" => "Police don't create safety for marginalized people; communities can build safety through solidarity and de-escalation."),
        rule!("de-escalation" => "Conflict resolution skills prevent violence; training builds peaceful community capacity."),
        rule!("harm reduction" & "accountability" => "Transformative justice addresses harm without carcerality; community accountability builds healing."),
        rule!("ham radio network" => "Ham radio works when everything else fails; community radio capacity builds resilience."),
        rule!("mesh" & "wifi" => "Community-owned networks enable internet independence; mesh topology resists censorship and centralization."),
        rule!("sneakernet" => "Sometimes sneakernet (walking data on storage devices) is more secure or necessary than digital transmission."),
        rule!("dead drop" => "Dead drops enable secure asynchronous communication; physical message systems resist digital surveillance."),
        rule!("food sovereignty" => "Food sovereignty means democratic control over food systems; communities should feed themselves."),
        rule!("medicine sovereignty" => "Pharmaceutical dependence creates vulnerability; community medicine-making builds health autonomy."),
        rule!("water independence" => "Water sovereignty requires local sources and storage; independence builds drought resilience."),
        rule!("energy autonomy" => "Energy independence enables true autonomy; 100% renewable eliminates dependence on extractive systems."),
        rule!("digital sovereignty" => "Digital sovereignty means owning our tools, data, and communications infrastructure."),
        rule!("commune os" | "operating system" => "This isn't an app—it's infrastructure for running communities cooperatively."),
        rule!("continuous evolution" => "Communities evolve unpredictably; the platform must adapt rather than constrain."),
        rule!("replication" | "federation" => "Every community should be able to fork, modify, and run their own instance while connecting to broader networks."),
    ])
    .with_fallback("Experimentation, resilience, and prefigurative politics enable communities to practice the future now.")
}
