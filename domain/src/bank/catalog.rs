//! Built-in PKI maturity catalog

use crate::assessment::domain::Domain;
use crate::assessment::question::{AnswerOption, Question};

static GOV1: [AnswerOption; 5] = [
    AnswerOption::new(1, "No documented policy exists"),
    AnswerOption::new(2, "Basic policy exists but is not comprehensive"),
    AnswerOption::new(3, "Comprehensive policy exists but is not regularly reviewed"),
    AnswerOption::new(4, "Comprehensive policy exists and is regularly reviewed"),
    AnswerOption::new(5, "Comprehensive policy exists, is regularly reviewed, and compliance is audited"),
];

static GOV2: [AnswerOption; 5] = [
    AnswerOption::new(1, "No defined governance structure"),
    AnswerOption::new(2, "Basic governance with unclear roles and responsibilities"),
    AnswerOption::new(3, "Defined governance structure with clear roles"),
    AnswerOption::new(4, "Well-defined governance with regular oversight"),
    AnswerOption::new(5, "Comprehensive governance with executive support and regular oversight"),
];

static GOV3: [AnswerOption; 5] = [
    AnswerOption::new(1, "No risk management framework"),
    AnswerOption::new(2, "Basic risk identification but no formal management"),
    AnswerOption::new(3, "Formal risk management framework but inconsistently applied"),
    AnswerOption::new(4, "Comprehensive risk management with regular assessments"),
    AnswerOption::new(5, "Advanced risk management integrated with enterprise risk processes"),
];

static GOV4: [AnswerOption; 5] = [
    AnswerOption::new(1, "No alignment with business or compliance needs"),
    AnswerOption::new(2, "Basic alignment with some business needs"),
    AnswerOption::new(3, "Alignment with business needs and some compliance requirements"),
    AnswerOption::new(4, "Strong alignment with business and compliance requirements"),
    AnswerOption::new(5, "Perfect alignment with business strategy and all compliance requirements"),
];

static GOV5: [AnswerOption; 5] = [
    AnswerOption::new(1, "No compliance program"),
    AnswerOption::new(2, "Basic compliance checks but not comprehensive"),
    AnswerOption::new(3, "Formal compliance program but not regularly audited"),
    AnswerOption::new(4, "Comprehensive compliance program with regular audits"),
    AnswerOption::new(5, "Advanced compliance program with continuous monitoring and improvement"),
];

static MGMT1: [AnswerOption; 5] = [
    AnswerOption::new(1, "No certificate inventory exists"),
    AnswerOption::new(2, "Partial inventory of certificates"),
    AnswerOption::new(3, "Complete inventory but not regularly updated"),
    AnswerOption::new(4, "Complete inventory that is regularly maintained"),
    AnswerOption::new(5, "Automated discovery and comprehensive inventory maintenance"),
];

static MGMT2: [AnswerOption; 5] = [
    AnswerOption::new(1, "No defined lifecycle management process"),
    AnswerOption::new(2, "Basic processes for some lifecycle phases"),
    AnswerOption::new(3, "Defined processes for the full lifecycle but manual tracking"),
    AnswerOption::new(4, "Comprehensive lifecycle management with automated tracking"),
    AnswerOption::new(5, "Advanced lifecycle management with automation and integration"),
];

static MGMT3: [AnswerOption; 5] = [
    AnswerOption::new(1, "No process for tracking renewals or expirations"),
    AnswerOption::new(2, "Manual tracking with frequent lapses"),
    AnswerOption::new(3, "Semi-automated tracking with occasional lapses"),
    AnswerOption::new(4, "Automated tracking with alerts and minimal lapses"),
    AnswerOption::new(5, "Fully automated renewal process with no lapses"),
];

static MGMT4: [AnswerOption; 5] = [
    AnswerOption::new(1, "No defined revocation process"),
    AnswerOption::new(2, "Basic revocation process but not consistently followed"),
    AnswerOption::new(3, "Defined revocation process that is manually executed"),
    AnswerOption::new(4, "Comprehensive revocation process with some automation"),
    AnswerOption::new(5, "Fully automated and tested revocation process"),
];

static MGMT5: [AnswerOption; 5] = [
    AnswerOption::new(1, "No controls for private key management"),
    AnswerOption::new(2, "Basic key management with minimal controls"),
    AnswerOption::new(3, "Defined key management practices but inconsistently applied"),
    AnswerOption::new(4, "Strong key management practices with hardware protection"),
    AnswerOption::new(5, "Advanced key management with HSMs and comprehensive controls"),
];

static OPS1: [AnswerOption; 5] = [
    AnswerOption::new(1, "No incident response plan"),
    AnswerOption::new(2, "Basic incident response but not PKI-specific"),
    AnswerOption::new(3, "Documented PKI incident response but not tested"),
    AnswerOption::new(4, "Comprehensive incident response plan that is regularly tested"),
    AnswerOption::new(5, "Advanced incident response with automation and integration"),
];

static OPS2: [AnswerOption; 5] = [
    AnswerOption::new(1, "No defined CA operations procedures"),
    AnswerOption::new(2, "Basic CA procedures but inconsistently followed"),
    AnswerOption::new(3, "Documented CA procedures that are manually followed"),
    AnswerOption::new(4, "Comprehensive CA operations with regular auditing"),
    AnswerOption::new(5, "Advanced CA operations with automation and separation of duties"),
];

static OPS3: [AnswerOption; 5] = [
    AnswerOption::new(1, "No business continuity plan"),
    AnswerOption::new(2, "Basic continuity planning but not tested"),
    AnswerOption::new(3, "Documented continuity plan but rarely tested"),
    AnswerOption::new(4, "Comprehensive continuity plan that is regularly tested"),
    AnswerOption::new(5, "Advanced continuity planning with automation and redundancy"),
];

static OPS4: [AnswerOption; 5] = [
    AnswerOption::new(1, "Manual, ad-hoc deployment"),
    AnswerOption::new(2, "Semi-automated deployment with minimal controls"),
    AnswerOption::new(3, "Defined deployment processes with manual verification"),
    AnswerOption::new(4, "Automated deployment with strong controls"),
    AnswerOption::new(5, "Fully automated, secure deployment with verification"),
];

static OPS5: [AnswerOption; 5] = [
    AnswerOption::new(1, "No monitoring or alerting"),
    AnswerOption::new(2, "Basic monitoring with limited alerting"),
    AnswerOption::new(3, "Regular monitoring with manual review"),
    AnswerOption::new(4, "Comprehensive monitoring with automated alerts"),
    AnswerOption::new(5, "Advanced monitoring with predictive analytics and automated remediation"),
];

static RES1: [AnswerOption; 5] = [
    AnswerOption::new(1, "No dedicated PKI expertise"),
    AnswerOption::new(2, "Limited expertise in a few individuals"),
    AnswerOption::new(3, "Dedicated resources with basic PKI knowledge"),
    AnswerOption::new(4, "Team with strong PKI expertise"),
    AnswerOption::new(5, "Dedicated PKI team with specialized expertise and certifications"),
];

static RES2: [AnswerOption; 5] = [
    AnswerOption::new(1, "No training program"),
    AnswerOption::new(2, "Ad-hoc, informal training"),
    AnswerOption::new(3, "Basic training program but not comprehensive"),
    AnswerOption::new(4, "Comprehensive training program with regular updates"),
    AnswerOption::new(5, "Advanced training program with certification requirements"),
];

static RES3: [AnswerOption; 5] = [
    AnswerOption::new(1, "No dedicated certificate management tools"),
    AnswerOption::new(2, "Basic tools with limited functionality"),
    AnswerOption::new(3, "Adequate tools but not fully utilized"),
    AnswerOption::new(4, "Comprehensive tools that are well utilized"),
    AnswerOption::new(5, "Advanced tools with automation and integration"),
];

static RES4: [AnswerOption; 5] = [
    AnswerOption::new(1, "No dedicated budget"),
    AnswerOption::new(2, "Minimal budget that is frequently insufficient"),
    AnswerOption::new(3, "Adequate but inconsistent budget"),
    AnswerOption::new(4, "Consistent budget aligned with needs"),
    AnswerOption::new(5, "Comprehensive budget with strategic investments"),
];

static RES5: [AnswerOption; 5] = [
    AnswerOption::new(1, "No executive support or awareness"),
    AnswerOption::new(2, "Limited awareness but minimal support"),
    AnswerOption::new(3, "Awareness and basic support for critical initiatives"),
    AnswerOption::new(4, "Strong support for PKI initiatives"),
    AnswerOption::new(5, "Executive championing of PKI as a strategic asset"),
];

pub(super) static PKI_QUESTIONS: &[Question] = &[
    Question::new(
        "gov1",
        "Do you have a documented PKI policy?",
        Domain::Governance,
        &GOV1,
    ),
    Question::new(
        "gov2",
        "Is there a defined PKI governance structure?",
        Domain::Governance,
        &GOV2,
    ),
    Question::new(
        "gov3",
        "Do you have a risk management framework for your PKI?",
        Domain::Governance,
        &GOV3,
    ),
    Question::new(
        "gov4",
        "Are certificates aligned with business and compliance needs?",
        Domain::Governance,
        &GOV4,
    ),
    Question::new(
        "gov5",
        "Is there a compliance program for certificate management?",
        Domain::Governance,
        &GOV5,
    ),
    Question::new(
        "mgmt1",
        "Do you maintain a complete inventory of certificates?",
        Domain::Management,
        &MGMT1,
    ),
    Question::new(
        "mgmt2",
        "Is there a certificate lifecycle management process?",
        Domain::Management,
        &MGMT2,
    ),
    Question::new(
        "mgmt3",
        "How do you manage certificate renewals and expirations?",
        Domain::Management,
        &MGMT3,
    ),
    Question::new(
        "mgmt4",
        "Is there a process for certificate revocation?",
        Domain::Management,
        &MGMT4,
    ),
    Question::new(
        "mgmt5",
        "How do you manage private keys?",
        Domain::Management,
        &MGMT5,
    ),
    Question::new(
        "ops1",
        "Is there a documented incident response plan for PKI issues?",
        Domain::Operations,
        &OPS1,
    ),
    Question::new(
        "ops2",
        "How do you manage certificate authority operations?",
        Domain::Operations,
        &OPS2,
    ),
    Question::new(
        "ops3",
        "Is there a business continuity plan for your PKI?",
        Domain::Operations,
        &OPS3,
    ),
    Question::new(
        "ops4",
        "How is certificate deployment managed?",
        Domain::Operations,
        &OPS4,
    ),
    Question::new(
        "ops5",
        "Are there operational monitoring and alerting for PKI components?",
        Domain::Operations,
        &OPS5,
    ),
    Question::new(
        "res1",
        "Is there dedicated PKI expertise within the organization?",
        Domain::Resources,
        &RES1,
    ),
    Question::new(
        "res2",
        "Is there a training program for PKI administrators?",
        Domain::Resources,
        &RES2,
    ),
    Question::new(
        "res3",
        "Are there adequate tools for certificate management?",
        Domain::Resources,
        &RES3,
    ),
    Question::new(
        "res4",
        "Is there a budget allocated specifically for PKI operations?",
        Domain::Resources,
        &RES4,
    ),
    Question::new(
        "res5",
        "Is there executive support for PKI initiatives?",
        Domain::Resources,
        &RES5,
    ),
];
