//! Static letter templates and supporting phrase tables. Placeholders use
//! the `[NAME]` convention; bracketed instructions that survive rendering are
//! meant for the citizen to fill in by hand.

/// Keywords that mark a query as a status inquiry rather than a general
/// information request.
pub const STATUS_KEYWORDS: &[&str] = &[
    "status",
    "application",
    "submitted",
    "pending",
    "delay",
    "processing",
];

/// Known application-type phrases, matched by substring in declared order.
pub const APPLICATION_TYPES: &[&str] = &[
    "ration card",
    "driving license",
    "passport",
    "adhaar card",
    "voter id",
    "caste certificate",
    "income certificate",
    "domicile certificate",
    "birth certificate",
    "death certificate",
    "ayushman bharat",
];

/// Instruction left in place when no application type can be extracted.
pub const APPLICATION_TYPE_PLACEHOLDER: &str = "[Application Type]";

/// Canned specific-request clauses for the basic template, consumed by
/// position. The first two are used today; further positions are reserved
/// for more specific drafts.
pub const COMMON_REQUESTS: &[&str] = &[
    "Detailed breakdown of the information with supporting documents",
    "Timeline for any pending actions related to this matter",
    "Copies of all relevant files, records, and correspondence",
    "Details of any fees or charges applicable",
    "Information about the decision-making process followed",
    "Contact details of officers responsible for this matter",
];

/// Numbered clauses appended to every status letter after the fixed six.
pub const ADDITIONAL_STATUS_REQUESTS: &str = "\
7. Any correspondence or communication related to my application
8. Details of any verification process conducted
9. List of documents currently on file for my application
10. Information about any fees paid and receipts issued";

pub const BASIC_TEMPLATE: &str = "\
To,
The Public Information Officer,
[DEPARTMENT]

Subject: Request for Information under Right to Information Act, 2005

Sir/Madam,

Under Section 6(1) of the Right to Information Act, 2005, I hereby request the following information:

[QUERY_CONTENT]

I am also requesting the following details:
1. [SPECIFIC_REQUEST_1]
2. [SPECIFIC_REQUEST_2]
3. Name and designation of the officer responsible for the above information
4. Contact details of the concerned officer

I am enclosing the application fee of Rs. 10/- as required under the RTI Act.

If the information requested falls under another department, kindly transfer this application to the concerned department under Section 6(3) of the RTI Act and inform me of the same.

Please provide the information within the prescribed time limit of 30 days.

Thanking you,

Yours faithfully,
[APPLICANT_NAME]
Date: [DATE]";

pub const STATUS_TEMPLATE: &str = "\
To,
The Public Information Officer,
[DEPARTMENT]

Subject: Status inquiry for [APPLICATION_TYPE] application under RTI Act 2005

Sir/Madam,

Under Section 6(1) of the Right to Information Act, 2005, I request information regarding my [APPLICATION_TYPE] application:

Application Details:
- Application/Reference Number: [REF_NUMBER]
- Date of Submission: [SUBMISSION_DATE]
- Office/Department: [OFFICE_NAME]

I request the following information:
1. Current status of the above application
2. Reason for delay (if any)
3. Expected timeline for completion
4. Name and contact details of the officer handling this application
5. Any additional documents required from my side
6. Copy of the complete file noting/proceedings related to my application

[ADDITIONAL_REQUESTS]

Please provide this information within 30 days as per RTI Act provisions.

Thanking you,

Yours faithfully,
[APPLICANT_NAME]
Date: [DATE]";
