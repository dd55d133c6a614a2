//! Caliper v1 entity types, including the digital-resource subtypes.

caliper_symbols! {
    /// Caliper `@type` of an entity.
    EntityType {
        Annotation => "http://purl.imsglobal.org/caliper/v1/Annotation",
        Attempt => "http://purl.imsglobal.org/caliper/v1/Attempt",
        CourseOffering => "http://purl.imsglobal.org/caliper/v1/lis/CourseOffering",
        CourseSection => "http://purl.imsglobal.org/caliper/v1/lis/CourseSection",
        DigitalResource => "http://purl.imsglobal.org/caliper/v1/DigitalResource",
        Entity => "http://purl.imsglobal.org/caliper/v1/Entity",
        Group => "http://purl.imsglobal.org/caliper/v1/lis/Group",
        LearningObjective => "http://purl.imsglobal.org/caliper/v1/LearningObjective",
        Membership => "http://purl.imsglobal.org/caliper/v1/lis/Membership",
        Person => "http://purl.imsglobal.org/caliper/v1/lis/Person",
        Organization => "http://purl.imsglobal.org/caliper/v1/w3c/Organization",
        Response => "http://purl.imsglobal.org/caliper/v1/Response",
        Result => "http://purl.imsglobal.org/caliper/v1/Result",
        Session => "http://purl.imsglobal.org/caliper/v1/Session",
        SoftwareApplication => "http://purl.imsglobal.org/caliper/v1/SoftwareApplication",
        View => "http://purl.imsglobal.org/caliper/v1/View",
        MediaLocation => "http://purl.imsglobal.org/caliper/v1/MediaLocation",
        MediaObject => "http://purl.imsglobal.org/caliper/v1/MediaObject",
        Reading => "http://purl.imsglobal.org/caliper/v1/Reading",
        WebPage => "http://purl.imsglobal.org/caliper/v1/WebPage",
    }
}
